//! Tooltip overlay and the event loop that owns its [`TooltipController`].

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;
use tracing::debug;

use crate::core::timing::opacity_transition;
use crate::core::tooltip::{FadeTicket, HoverState, ScreenPoint, TooltipContent, TooltipController};
use crate::core::{platform, timing};

#[derive(Debug, Clone)]
pub enum TooltipEvent {
    Enter {
        mark: usize,
        content: TooltipContent,
        pointer: ScreenPoint,
    },
    Move(ScreenPoint),
    Leave,
    FadeDone(FadeTicket),
}

type SenderSlot = Rc<RefCell<Option<UnboundedSender<TooltipEvent>>>>;

/// Hover state for one chart. Pointer events go through the returned coroutine;
/// fades are timed and reported back on the same channel, one event at a time.
pub fn use_tooltip(
    fade_ms: u64,
    offset: ScreenPoint,
) -> (Signal<TooltipController>, Coroutine<TooltipEvent>) {
    let controller = use_signal(|| TooltipController::new(fade_ms, offset));
    let sender_slot: SenderSlot = use_hook(|| Rc::new(RefCell::new(None)));
    let sender_slot_for_loop = sender_slot.clone();

    let coroutine = use_coroutine(move |mut rx: UnboundedReceiver<TooltipEvent>| {
        let sender_slot = sender_slot_for_loop.clone();
        let mut controller = controller;

        async move {
            while let Some(event) = rx.next().await {
                let ticket = match event {
                    TooltipEvent::Enter {
                        mark,
                        content,
                        pointer,
                    } => controller.with_mut(|tip| tip.pointer_enter(mark, content, pointer)),
                    TooltipEvent::Move(pointer) => {
                        controller.with_mut(|tip| tip.pointer_move(pointer));
                        None
                    }
                    TooltipEvent::Leave => controller.with_mut(|tip| tip.pointer_leave()),
                    TooltipEvent::FadeDone(ticket) => {
                        if !controller.with_mut(|tip| tip.fade_complete(ticket)) {
                            debug!(generation = ticket.generation, "superseded tooltip fade dropped");
                        }
                        None
                    }
                };

                if let Some(ticket) = ticket {
                    queue_fade(sender_slot.clone(), ticket);
                }
            }
        }
    });

    sender_slot.borrow_mut().replace(coroutine.tx());

    (controller, coroutine)
}

fn queue_fade(sender_slot: SenderSlot, ticket: FadeTicket) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        platform::spawn_future(async move {
            timing::sleep_ms(ticket.duration_ms).await;
            let _ = sender.unbounded_send(TooltipEvent::FadeDone(ticket));
        });
    }
}

#[component]
pub fn TooltipBox(state: HoverState, fade_ms: u64) -> Element {
    let visibility = if state.visible() { "visible" } else { "hidden" };
    let style = format!(
        "position: absolute; left: {}px; top: {}px; visibility: {visibility}; opacity: {}; transition: {};",
        state.position.x,
        state.position.y,
        state.target_opacity(),
        opacity_transition(fade_ms),
    );

    rsx! {
        div { class: "tooltip", style: "{style}",
            if let Some(content) = state.content.as_ref() {
                strong { "{content.title}" }
                br {}
                "{content.year}"
                br {}
                strong { "{content.label}:" }
                " {content.value_text()}"
            }
        }
    }
}
