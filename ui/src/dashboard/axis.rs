use dioxus::prelude::*;

const TICK_SIZE: f64 = 6.0;

/// One labelled tick, `offset` pixels along its axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub offset: f64,
    pub label: String,
}

/// Horizontal axis drawn along the bottom of a `width` × `height` plot.
pub fn bottom_axis(ticks: Vec<Tick>, width: f64, height: f64, slanted: bool) -> Element {
    let label_y = TICK_SIZE + 3.0;

    rsx! {
        g { class: "axis axis--x", transform: "translate(0,{height})",
            line { x1: "0", x2: "{width}", stroke: "currentColor" }
            for (idx, tick) in ticks.into_iter().enumerate() {
                g { key: "{idx}", transform: "translate({tick.offset},0)",
                    line { y2: "{TICK_SIZE}", stroke: "currentColor" }
                    if slanted {
                        text {
                            fill: "currentColor",
                            y: "{label_y}",
                            transform: "rotate(-40)",
                            "text-anchor": "end",
                            "{tick.label}"
                        }
                    } else {
                        text {
                            fill: "currentColor",
                            y: "{label_y}",
                            "dy": "0.71em",
                            "text-anchor": "middle",
                            "{tick.label}"
                        }
                    }
                }
            }
        }
    }
}

/// Vertical axis drawn along the left edge of a plot `height` pixels tall.
pub fn left_axis(ticks: Vec<Tick>, height: f64) -> Element {
    let tick_x = -TICK_SIZE;
    let label_x = -(TICK_SIZE + 3.0);

    rsx! {
        g { class: "axis axis--y",
            line { y1: "0", y2: "{height}", stroke: "currentColor" }
            for (idx, tick) in ticks.into_iter().enumerate() {
                g { key: "{idx}", transform: "translate(0,{tick.offset})",
                    line { x2: "{tick_x}", stroke: "currentColor" }
                    text {
                        fill: "currentColor",
                        x: "{label_x}",
                        "dy": "0.32em",
                        "text-anchor": "end",
                        "{tick.label}"
                    }
                }
            }
        }
    }
}
