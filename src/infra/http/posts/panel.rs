use crate::{
    domain::entities::PostRecord,
    infra::http::routes::Route,
    presentation::views::{PostListView, PostRowView},
};

pub(super) fn build_post_list_view(posts: Vec<PostRecord>) -> PostListView {
    let posts = posts
        .into_iter()
        .map(|post| PostRowView {
            edit_href: Route::PostUpdate { id: post.id }.path(),
            delete_href: Route::PostDelete { id: post.id }.path(),
            id: post.id,
            title: post.title,
        })
        .collect();

    PostListView {
        posts,
        new_post_href: Route::PostCreate.path(),
    }
}
