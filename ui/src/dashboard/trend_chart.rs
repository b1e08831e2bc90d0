use std::cmp::Ordering;

use dioxus::prelude::*;

use crate::core::config::{CONFIG, MARK_STROKE, SERIES_COLOR};
use crate::core::curve::monotone_x_path;
use crate::core::format::format_si;
use crate::core::record::{FilmRecord, RankField};
use crate::core::scale::{series, ChartScales, DEFAULT_TICKS};
use crate::core::tooltip::{ScreenPoint, TooltipContent};
use crate::dashboard::axis::{bottom_axis, left_axis, Tick};
use crate::dashboard::tooltip::{use_tooltip, TooltipBox, TooltipEvent};

/// Year-against-amount line chart with one hoverable mark per film.
#[component]
pub fn TrendChart(
    id: String,
    records: Vec<FilmRecord>,
    field: RankField,
    title: String,
    x_label: String,
    y_label: String,
) -> Element {
    let config = &*CONFIG;
    let frame = config.trend_frame;
    let geometry = frame.geometry();
    let (width, height) = (geometry.width, geometry.height);
    let margins = frame.margins;

    let (tooltip, events) = use_tooltip(config.fade_ms, config.tooltip_offset);

    let points = series(&records, field);
    let scales = ChartScales::for_series(&points, geometry);

    let mut path_points: Vec<(f64, f64)> = points
        .iter()
        .map(|p| (scales.x_map(p.x), scales.y_map(p.y)))
        .collect();
    path_points.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
    let line_path = monotone_x_path(&path_points);

    let x_ticks: Vec<Tick> = scales
        .x
        .ticks(DEFAULT_TICKS)
        .into_iter()
        .filter(|year| year.fract() == 0.0)
        .map(|year| Tick {
            offset: scales.x_map(year),
            label: format!("{year:.0}"),
        })
        .collect();
    let y_ticks: Vec<Tick> = scales
        .y
        .ticks(DEFAULT_TICKS)
        .into_iter()
        .map(|amount| Tick {
            offset: scales.y_map(amount),
            label: format_si(amount),
        })
        .collect();

    // Hovering a mark shows the film found by a nearest-year lookup on its x position.
    let marks: Vec<(f64, f64, TooltipContent)> = points
        .iter()
        .filter_map(|point| {
            let cx = scales.x_map(point.x);
            let record = scales
                .nearest(&points, cx)
                .and_then(|idx| records.get(points[idx].source))
                .or_else(|| records.get(point.source))?;
            let content = TooltipContent {
                title: record.title.clone(),
                year: record.year?,
                label: y_label.clone(),
                value: point.y,
            };
            Some((cx, scales.y_map(point.y), content))
        })
        .collect();

    let outer_width = frame.outer_width;
    let outer_height = frame.outer_height;
    let hover = tooltip.read().state().clone();

    rsx! {
        figure { id: "{id}", class: "chart chart--trend",
            figcaption { class: "chart__title", "{title}" }
            svg {
                width: "{outer_width}",
                height: "{outer_height}",
                g { transform: "translate({margins.left},{margins.top})",
                    {bottom_axis(x_ticks, width, height, false)}
                    {left_axis(y_ticks, height)}

                    text {
                        class: "chart__axis-label",
                        x: "{width / 2.0}",
                        y: "{height + margins.bottom - 12.0}",
                        "text-anchor": "middle",
                        "{x_label}"
                    }
                    text {
                        class: "chart__axis-label",
                        transform: "rotate(-90)",
                        x: "{-height / 2.0}",
                        y: "{-margins.left + 16.0}",
                        "text-anchor": "middle",
                        "{y_label}"
                    }

                    path {
                        d: "{line_path}",
                        fill: "none",
                        stroke: SERIES_COLOR,
                        "stroke-width": "3",
                    }

                    for (idx, (cx, cy, content)) in marks.into_iter().enumerate() {
                        circle {
                            key: "{idx}",
                            class: "chart__mark",
                            cx: "{cx}",
                            cy: "{cy}",
                            r: "5",
                            fill: SERIES_COLOR,
                            stroke: MARK_STROKE,
                            "stroke-width": "1.5",
                            onmouseenter: move |evt: MouseEvent| {
                                let page = evt.page_coordinates();
                                events.send(TooltipEvent::Enter {
                                    mark: idx,
                                    content: content.clone(),
                                    pointer: ScreenPoint::new(page.x, page.y),
                                });
                            },
                            onmousemove: move |evt: MouseEvent| {
                                let page = evt.page_coordinates();
                                events.send(TooltipEvent::Move(ScreenPoint::new(page.x, page.y)));
                            },
                            onmouseleave: move |_| events.send(TooltipEvent::Leave),
                        }
                    }
                }
            }
            TooltipBox { state: hover, fade_ms: config.fade_ms }
        }
    }
}
