use dioxus::prelude::*;

/// Renders a freshly built dom to HTML.
/// The SSR escaper writes '/' as `&#x2f;`; that is undone so URLs compare literally.
pub(crate) fn render_dom(mut dom: VirtualDom) -> String {
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom).replace("&#x2f;", "/")
}

pub(crate) fn render_app(app: fn() -> Element) -> String {
    render_dom(VirtualDom::new(app))
}

/// The opening `<input ...>` tag carrying `id="{id}"`
pub(crate) fn input_tag<'a>(html: &'a str, id: &str) -> &'a str {
    let marker = format!("id=\"{}\"", id);
    let at = html
        .match_indices(&marker)
        .map(|(at, _)| at)
        .find(|at| {
            html[..*at]
                .rfind('<')
                .is_some_and(|open| html[open..].starts_with("<input"))
        })
        .unwrap_or_else(|| panic!("no input with id {} in {}", id, html));
    let open = html[..at].rfind('<').unwrap();
    let close = at + html[at..].find('>').unwrap();
    &html[open..=close]
}
