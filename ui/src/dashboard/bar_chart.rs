use dioxus::prelude::*;

use crate::core::aggregate::RankedGroup;
use crate::core::config::{CONFIG, SERIES_COLOR};
use crate::core::format::format_tick;
use crate::core::scale::{BarScales, DEFAULT_TICKS};
use crate::dashboard::axis::{bottom_axis, left_axis, Tick};

/// Vertical bars, one per distributor, heights proportional to film counts.
#[component]
pub fn DistributorChart(id: String, groups: Vec<RankedGroup>, title: String, y_label: String) -> Element {
    let frame = CONFIG.bar_frame;
    let geometry = frame.geometry();
    let (width, height) = (geometry.width, geometry.height);
    let margins = frame.margins;

    let scales = BarScales::for_groups(&groups, geometry);
    let bandwidth = scales.x.bandwidth();

    let x_ticks: Vec<Tick> = groups
        .iter()
        .enumerate()
        .map(|(idx, group)| Tick {
            offset: scales.x.position_at(idx) + bandwidth / 2.0,
            label: group.key.clone(),
        })
        .collect();
    let step = scales.y.tick_step(DEFAULT_TICKS);
    let y_ticks: Vec<Tick> = scales
        .y
        .ticks(DEFAULT_TICKS)
        .into_iter()
        .map(|count| Tick {
            offset: scales.y.map(count),
            label: format_tick(count, step),
        })
        .collect();

    let bars: Vec<(f64, f64, f64, String)> = groups
        .iter()
        .enumerate()
        .map(|(idx, group)| {
            let top = scales.y.map(group.count as f64);
            let bar_height = (height - top).max(0.0);
            (scales.x.position_at(idx), top, bar_height, group.key.clone())
        })
        .collect();

    rsx! {
        figure { id: "{id}", class: "chart chart--bars",
            figcaption { class: "chart__title", "{title}" }
            svg {
                width: "{frame.outer_width}",
                height: "{frame.outer_height}",
                g { transform: "translate({margins.left},{margins.top})",
                    {bottom_axis(x_ticks, width, height, true)}
                    {left_axis(y_ticks, height)}

                    text {
                        class: "chart__axis-label",
                        transform: "rotate(-90)",
                        x: "{-height / 2.0}",
                        y: "{-margins.left + 16.0}",
                        "text-anchor": "middle",
                        "{y_label}"
                    }

                    for (x, y, bar_height, key) in bars {
                        rect {
                            key: "{key}",
                            class: "chart__bar",
                            x: "{x}",
                            y: "{y}",
                            width: "{bandwidth}",
                            height: "{bar_height}",
                            fill: SERIES_COLOR,
                        }
                    }
                }
            }
        }
    }
}
