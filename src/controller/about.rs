use crate::view::AboutView;

pub async fn about() -> AboutView {
    AboutView { title: "About Us" }
}
