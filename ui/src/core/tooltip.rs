//! Hover tooltip state machine.
//!
//! ```text
//! Hidden --enter--> Entering --fade done--> Visible
//!    ^                 |  ^                    |
//!    |               leave |enter            leave
//!    |                 v  |                    v
//!    +---fade done--- Leaving <----------------+
//! ```
//!
//! Content is bound when a fade-in *starts*. Every transition that starts a fade
//! hands out a [`FadeTicket`]; a ticket only completes its fade while it is the
//! latest one issued, so a newer transition always supersedes a pending one.
//! An enter that arrives while a previous mark is still fading out swaps the
//! content directly and fades back in without passing through `Hidden`.

use super::format::format_currency;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TooltipPhase {
    #[default]
    Hidden,
    Entering,
    Visible,
    Leaving,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub title: String,
    pub year: i32,
    /// Axis label of the hovered value, e.g. "Budget ($)".
    pub label: String,
    pub value: f64,
}

impl TooltipContent {
    pub fn value_text(&self) -> String {
        format_currency(self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset_by(self, offset: ScreenPoint) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y)
    }
}

/// Handle for one scheduled fade. Deliver it back through
/// [`TooltipController::fade_complete`] once `duration_ms` has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeTicket {
    pub generation: u64,
    pub fading_in: bool,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HoverState {
    pub phase: TooltipPhase,
    pub content: Option<TooltipContent>,
    /// Index of the hovered mark within its chart.
    pub mark: Option<usize>,
    /// Where the tooltip box sits, pointer position plus the configured offset.
    pub position: ScreenPoint,
}

impl HoverState {
    pub fn visible(&self) -> bool {
        self.phase != TooltipPhase::Hidden
    }

    /// Opacity the tooltip is heading towards; the fade itself is a CSS transition.
    pub fn target_opacity(&self) -> f64 {
        match self.phase {
            TooltipPhase::Entering | TooltipPhase::Visible => 1.0,
            TooltipPhase::Hidden | TooltipPhase::Leaving => 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipController {
    state: HoverState,
    generation: u64,
    fade_ms: u64,
    offset: ScreenPoint,
}

impl TooltipController {
    pub fn new(fade_ms: u64, offset: ScreenPoint) -> Self {
        Self {
            state: HoverState::default(),
            generation: 0,
            fade_ms,
            offset,
        }
    }

    pub fn state(&self) -> &HoverState {
        &self.state
    }

    pub fn phase(&self) -> TooltipPhase {
        self.state.phase
    }

    /// Pointer entered `mark`. Re-entering the mark that is already shown only
    /// moves the tooltip.
    pub fn pointer_enter(
        &mut self,
        mark: usize,
        content: TooltipContent,
        pointer: ScreenPoint,
    ) -> Option<FadeTicket> {
        self.state.position = pointer.offset_by(self.offset);

        let showing_same_mark = matches!(
            self.state.phase,
            TooltipPhase::Entering | TooltipPhase::Visible
        ) && self.state.mark == Some(mark);
        if showing_same_mark {
            return None;
        }

        self.state.mark = Some(mark);
        self.state.content = Some(content);
        Some(self.begin_fade(TooltipPhase::Entering))
    }

    pub fn pointer_move(&mut self, pointer: ScreenPoint) {
        if self.state.phase != TooltipPhase::Hidden {
            self.state.position = pointer.offset_by(self.offset);
        }
    }

    pub fn pointer_leave(&mut self) -> Option<FadeTicket> {
        match self.state.phase {
            TooltipPhase::Entering | TooltipPhase::Visible => {
                Some(self.begin_fade(TooltipPhase::Leaving))
            }
            TooltipPhase::Hidden | TooltipPhase::Leaving => None,
        }
    }

    /// Finishes the fade `ticket` was issued for. Returns `false` when a later
    /// transition superseded it.
    pub fn fade_complete(&mut self, ticket: FadeTicket) -> bool {
        if ticket.generation != self.generation {
            return false;
        }

        match (ticket.fading_in, self.state.phase) {
            (true, TooltipPhase::Entering) => {
                self.state.phase = TooltipPhase::Visible;
                true
            }
            (false, TooltipPhase::Leaving) => {
                self.state.phase = TooltipPhase::Hidden;
                self.state.content = None;
                self.state.mark = None;
                true
            }
            _ => false,
        }
    }

    fn begin_fade(&mut self, phase: TooltipPhase) -> FadeTicket {
        self.generation += 1;
        self.state.phase = phase;
        FadeTicket {
            generation: self.generation,
            fading_in: phase == TooltipPhase::Entering,
            duration_ms: self.fade_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FADE_MS: u64 = 200;

    fn controller() -> TooltipController {
        TooltipController::new(FADE_MS, ScreenPoint::new(10.0, -30.0))
    }

    fn content(title: &str) -> TooltipContent {
        TooltipContent {
            title: title.to_string(),
            year: 2001,
            label: "Budget ($)".to_string(),
            value: 1_500_000.0,
        }
    }

    #[test]
    fn full_cycle_passes_through_every_phase() {
        let mut tip = controller();
        assert_eq!(tip.phase(), TooltipPhase::Hidden);

        let fade_in = tip
            .pointer_enter(0, content("Heat"), ScreenPoint::new(100.0, 100.0))
            .unwrap();
        assert_eq!(fade_in.duration_ms, FADE_MS);
        assert_eq!(tip.phase(), TooltipPhase::Entering);
        assert_eq!(tip.state().content.as_ref().unwrap().title, "Heat");

        assert!(tip.fade_complete(fade_in));
        assert_eq!(tip.phase(), TooltipPhase::Visible);

        let fade_out = tip.pointer_leave().unwrap();
        assert_eq!(tip.phase(), TooltipPhase::Leaving);
        assert!(tip.state().content.is_some());

        assert!(tip.fade_complete(fade_out));
        assert_eq!(tip.phase(), TooltipPhase::Hidden);
        assert!(tip.state().content.is_none());
        assert!(!tip.state().visible());
    }

    #[test]
    fn content_is_bound_when_fade_in_starts() {
        let mut tip = controller();
        tip.pointer_enter(3, content("Alien"), ScreenPoint::default());
        assert_eq!(tip.state().mark, Some(3));
        assert_eq!(tip.state().content, Some(content("Alien")));
        assert_eq!(tip.state().target_opacity(), 1.0);
    }

    #[test]
    fn moves_follow_the_cursor_with_offset() {
        let mut tip = controller();
        tip.pointer_move(ScreenPoint::new(5.0, 5.0));
        assert_eq!(tip.state().position, ScreenPoint::default());

        tip.pointer_enter(0, content("Up"), ScreenPoint::new(50.0, 80.0));
        assert_eq!(tip.state().position, ScreenPoint::new(60.0, 50.0));

        tip.pointer_move(ScreenPoint::new(70.0, 90.0));
        assert_eq!(tip.state().position, ScreenPoint::new(80.0, 60.0));
        assert_eq!(tip.state().content, Some(content("Up")));
    }

    #[test]
    fn reentering_same_mark_does_not_restart_fade() {
        let mut tip = controller();
        let ticket = tip
            .pointer_enter(1, content("Jaws"), ScreenPoint::default())
            .unwrap();
        assert!(tip
            .pointer_enter(1, content("Jaws"), ScreenPoint::new(1.0, 1.0))
            .is_none());
        assert!(tip.fade_complete(ticket));
    }

    #[test]
    fn new_mark_restarts_entering_with_new_content() {
        let mut tip = controller();
        let first = tip
            .pointer_enter(1, content("Jaws"), ScreenPoint::default())
            .unwrap();
        let second = tip
            .pointer_enter(2, content("Rocky"), ScreenPoint::default())
            .unwrap();

        assert!(!tip.fade_complete(first));
        assert_eq!(tip.phase(), TooltipPhase::Entering);
        assert!(tip.fade_complete(second));
        assert_eq!(tip.state().content.as_ref().unwrap().title, "Rocky");
    }

    #[test]
    fn leave_then_enter_neighbour_never_hides() {
        let mut tip = controller();
        let fade_in = tip
            .pointer_enter(4, content("Tron"), ScreenPoint::default())
            .unwrap();
        tip.fade_complete(fade_in);

        let fade_out = tip.pointer_leave().unwrap();
        let swap = tip
            .pointer_enter(5, content("Big"), ScreenPoint::default())
            .unwrap();

        // The stale fade-out must not hide the freshly entered mark.
        assert!(!tip.fade_complete(fade_out));
        assert_eq!(tip.phase(), TooltipPhase::Entering);
        assert!(tip.state().visible());

        assert!(tip.fade_complete(swap));
        assert_eq!(tip.phase(), TooltipPhase::Visible);
        assert_eq!(tip.state().mark, Some(5));
        assert_eq!(tip.state().content.as_ref().unwrap().title, "Big");
    }

    #[test]
    fn leave_while_entering_supersedes_fade_in() {
        let mut tip = controller();
        let fade_in = tip
            .pointer_enter(0, content("Brazil"), ScreenPoint::default())
            .unwrap();
        let fade_out = tip.pointer_leave().unwrap();

        assert!(!tip.fade_complete(fade_in));
        assert_eq!(tip.phase(), TooltipPhase::Leaving);
        assert_eq!(tip.state().target_opacity(), 0.0);
        assert!(tip.fade_complete(fade_out));
        assert_eq!(tip.phase(), TooltipPhase::Hidden);
    }

    #[test]
    fn leave_when_hidden_is_ignored() {
        let mut tip = controller();
        assert!(tip.pointer_leave().is_none());
        assert_eq!(tip.phase(), TooltipPhase::Hidden);
    }

    #[test]
    fn value_text_is_currency() {
        assert_eq!(content("x").value_text(), "$1,500,000");
    }
}
