#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, Response, header},
};
use http_body_util::BodyExt;
use postdesk::{
    application::{
        admin::posts::AdminPostService,
        export::CsvQuoting,
        repos::{
            CreatePostParams, HealthRepo, PostsRepo, PostsWriteRepo, RepoError, UpdatePostParams,
        },
    },
    domain::entities::PostRecord,
    infra::http::{AdminSettings, AdminState, build_admin_router},
};
use tokio::sync::Mutex;
use tower::ServiceExt;

/// Posts keyed by slug; iteration order matches the Postgres `ORDER BY slug`.
#[derive(Default)]
pub struct InMemoryPostsRepo {
    posts: Mutex<BTreeMap<String, PostRecord>>,
    unhealthy: AtomicBool,
}

impl InMemoryPostsRepo {
    pub fn with_posts(posts: impl IntoIterator<Item = PostRecord>) -> Arc<Self> {
        let posts = posts
            .into_iter()
            .map(|post| (post.slug.clone(), post))
            .collect();
        Arc::new(Self {
            posts: Mutex::new(posts),
            unhealthy: AtomicBool::new(false),
        })
    }

    pub async fn get(&self, slug: &str) -> Option<PostRecord> {
        self.posts.lock().await.get(slug).cloned()
    }

    pub async fn len(&self) -> usize {
        self.posts.lock().await.len()
    }

    pub fn set_unhealthy(&self) {
        self.unhealthy.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl PostsRepo for InMemoryPostsRepo {
    async fn list_posts(&self) -> Result<Vec<PostRecord>, RepoError> {
        Ok(self.posts.lock().await.values().cloned().collect())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<PostRecord>, RepoError> {
        Ok(self.get(slug).await)
    }
}

#[async_trait]
impl PostsWriteRepo for InMemoryPostsRepo {
    async fn create_post(&self, params: CreatePostParams) -> Result<PostRecord, RepoError> {
        let mut posts = self.posts.lock().await;
        if posts.contains_key(&params.slug) {
            return Err(RepoError::Duplicate {
                constraint: "posts_pkey".to_string(),
            });
        }
        let post = PostRecord {
            slug: params.slug,
            title: params.title,
            markdown: params.markdown,
        };
        posts.insert(post.slug.clone(), post.clone());
        Ok(post)
    }

    async fn update_post(&self, params: UpdatePostParams) -> Result<PostRecord, RepoError> {
        let mut posts = self.posts.lock().await;
        let post = posts.get_mut(&params.slug).ok_or(RepoError::NotFound)?;
        post.title = params.title;
        post.markdown = params.markdown;
        Ok(post.clone())
    }

    async fn delete_post(&self, slug: &str) -> Result<(), RepoError> {
        self.posts
            .lock()
            .await
            .remove(slug)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl HealthRepo for InMemoryPostsRepo {
    async fn health_check(&self) -> Result<(), RepoError> {
        if self.unhealthy.load(Ordering::SeqCst) {
            Err(RepoError::Timeout)
        } else {
            Ok(())
        }
    }
}

pub fn post(slug: &str, title: &str, markdown: &str) -> PostRecord {
    PostRecord {
        slug: slug.to_string(),
        title: title.to_string(),
        markdown: markdown.to_string(),
    }
}

pub fn service(repo: &Arc<InMemoryPostsRepo>) -> AdminPostService {
    let reader: Arc<dyn PostsRepo> = repo.clone();
    let writer: Arc<dyn PostsWriteRepo> = repo.clone();
    AdminPostService::new(reader, writer)
}

pub fn router(repo: &Arc<InMemoryPostsRepo>) -> Router {
    router_with_quoting(repo, CsvQuoting::Verbatim)
}

pub fn router_with_quoting(repo: &Arc<InMemoryPostsRepo>, csv_quoting: CsvQuoting) -> Router {
    let health: Arc<dyn HealthRepo> = repo.clone();
    build_admin_router(AdminState {
        posts: Arc::new(service(repo)),
        health,
        settings: AdminSettings { csv_quoting },
    })
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    app.clone()
        .oneshot(request)
        .await
        .expect("router should respond")
}

/// `body` must already be form-urlencoded.
pub async fn post_form(app: &Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("request should build");
    app.clone()
        .oneshot(request)
        .await
        .expect("router should respond")
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body should be utf-8")
}

pub fn location(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
}
