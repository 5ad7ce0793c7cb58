use dioxus::prelude::*;

/// Vertical bar chart drawn with inline SVG.
///
/// `labels` and `values` are read pairwise; extra entries on either side are
/// ignored. Bars are scaled against the largest value.
#[component]
pub fn BarChart(
    #[props(default)] title: String,
    labels: Vec<String>,
    values: Vec<usize>,
) -> Element {
    const WIDTH: usize = 320;
    const HEIGHT: usize = 200;
    const LABEL_SPACE: usize = 24;

    let bars: Vec<(String, usize)> = labels.into_iter().zip(values).collect();
    let max = bars.iter().map(|(_, v)| *v).max().unwrap_or(0).max(1);
    let slot = WIDTH / bars.len().max(1);
    let bar_width = slot * 3 / 5;
    let plot_height = HEIGHT - LABEL_SPACE * 2;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        figure { class: "bar-chart",
            if !title.is_empty() {
                figcaption { class: "bar-chart-title", "{title}" }
            }
            svg {
                view_box: "0 0 {WIDTH} {HEIGHT}",
                width: "100%",
                for (i, (label, value)) in bars.iter().enumerate() {
                    {
                        let h = value * plot_height / max;
                        let x = i * slot + (slot - bar_width) / 2;
                        let y = HEIGHT - LABEL_SPACE - h;
                        rsx! {
                            g { class: "bar-chart-bar", key: "{label}",
                                rect {
                                    x: "{x}",
                                    y: "{y}",
                                    width: "{bar_width}",
                                    height: "{h}",
                                }
                                text {
                                    class: "bar-chart-value",
                                    x: "{x + bar_width / 2}",
                                    y: "{y.saturating_sub(6)}",
                                    text_anchor: "middle",
                                    "{value}"
                                }
                                text {
                                    class: "bar-chart-label",
                                    x: "{x + bar_width / 2}",
                                    y: "{HEIGHT - 6}",
                                    text_anchor: "middle",
                                    "{label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
