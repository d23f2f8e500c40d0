use rinja::Template;

#[derive(Debug, Template)]
#[template(path = "pages/about.html")]
pub struct AboutView {
    pub title: &'static str,
}
