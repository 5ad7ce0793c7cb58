use dioxus::prelude::*;

/// Loading placeholder with an animated pulse.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let base = vec![Attribute::new("class", "skeleton", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
        }
    }
}

/// "Loading..." text above a few skeleton bars.
#[component]
pub fn LoadingBlock(#[props(default = 3)] lines: usize) -> Element {
    rsx! {
        div { class: "loading-block",
            p { class: "loading-text", "Loading..." }
            for _ in 0..lines {
                Skeleton { style: "height: 1.25rem; width: 100%;" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render;
    use pretty_assertions::assert_eq;

    #[test]
    fn loading_block_announces_itself() {
        fn app() -> Element {
            rsx! {
                LoadingBlock { lines: 2 }
            }
        }
        let html = render(app);
        assert!(html.contains("Loading..."));
        assert_eq!(html.matches("class=\"skeleton\"").count(), 2);
    }
}
