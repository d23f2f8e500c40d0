use rinja::Template;

use crate::model::Post;

#[derive(Debug, Template)]
#[template(path = "pages/home.html")]
pub struct HomeView {
    pub title: &'static str,
    pub posts: Vec<Post>,
}
