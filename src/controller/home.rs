use axum::extract::State;

use crate::context::AppContext;
use crate::error::FlatbedError;
use crate::view::HomeView;

/// The posts listing. Repository failures propagate straight to the error
/// response path.
pub async fn home(State(context): State<AppContext>) -> Result<HomeView, FlatbedError> {
    let posts = context.posts.posts().await?;

    Ok(HomeView {
        title: "Welcome",
        posts,
    })
}
