use std::{collections::HashMap, sync::Arc};

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, Method, StatusCode},
    response::IntoResponse,
    routing::{any, get},
    Json, Router,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub const JSON_API: &str = "application/vnd.api+json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Workspace {
    pub id: String,
    pub organization: String,
    pub name: String,
    pub auto_apply: bool,
}

/// Top-level JSON:API document.
#[derive(Debug, Serialize, Deserialize)]
pub struct Document<T> {
    pub data: T,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Resource<A> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub attributes: A,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WorkspaceAttributes {
    pub name: String,
    #[serde(default)]
    pub auto_apply: bool,
}

/// Attributes accepted on update; omitted fields keep their value.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct UpdateAttributes {
    pub name: Option<String>,
    pub auto_apply: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDocument {
    pub errors: Vec<ErrorObject>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorObject {
    pub status: String,
    pub title: String,
}

type Failure = (StatusCode, Json<ErrorDocument>);

fn failure(status: StatusCode, title: &str) -> Failure {
    (
        status,
        Json(ErrorDocument {
            errors: vec![ErrorObject {
                status: status.as_u16().to_string(),
                title: title.to_string(),
            }],
        }),
    )
}

impl Workspace {
    fn to_resource(&self) -> Resource<WorkspaceAttributes> {
        Resource {
            id: Some(self.id.clone()),
            kind: "workspaces".to_string(),
            attributes: WorkspaceAttributes {
                name: self.name.clone(),
                auto_apply: self.auto_apply,
            },
        }
    }
}

pub type Db = Arc<RwLock<HashMap<String, Workspace>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route(
            "/api/v2/organizations/{org}/workspaces",
            get(list_workspaces).post(create_workspace),
        )
        .route(
            "/api/v2/workspaces/{id}",
            get(get_workspace)
                .put(update_workspace)
                .patch(update_workspace)
                .delete(delete_workspace),
        )
        .route("/echo", any(echo))
        .route("/status/{code}", any(status))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn require_token(headers: &HeaderMap) -> Result<(), Failure> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .unwrap_or_default();
    if token.is_empty() {
        return Err(failure(StatusCode::UNAUTHORIZED, "unauthorized"));
    }
    Ok(())
}

fn parse_document<T: DeserializeOwned>(headers: &HeaderMap, body: &[u8]) -> Result<T, Failure> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if content_type != JSON_API {
        return Err(failure(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "expected application/vnd.api+json",
        ));
    }
    serde_json::from_slice(body)
        .map_err(|_| failure(StatusCode::UNPROCESSABLE_ENTITY, "malformed document"))
}

async fn list_workspaces(
    State(db): State<Db>,
    Path(org): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Document<Vec<Resource<WorkspaceAttributes>>>>, Failure> {
    require_token(&headers)?;
    let workspaces = db.read().await;
    let mut data: Vec<_> = workspaces
        .values()
        .filter(|ws| ws.organization == org)
        .collect();
    data.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(Json(Document {
        data: data.into_iter().map(Workspace::to_resource).collect(),
    }))
}

async fn create_workspace(
    State(db): State<Db>,
    Path(org): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Document<Resource<WorkspaceAttributes>>>), Failure> {
    require_token(&headers)?;
    let input: Document<Resource<WorkspaceAttributes>> = parse_document(&headers, &body)?;
    let workspace = Workspace {
        id: format!("ws-{}", Uuid::new_v4().simple()),
        organization: org,
        name: input.data.attributes.name,
        auto_apply: input.data.attributes.auto_apply,
    };
    let data = workspace.to_resource();
    db.write().await.insert(workspace.id.clone(), workspace);
    Ok((StatusCode::CREATED, Json(Document { data })))
}

async fn get_workspace(
    State(db): State<Db>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Document<Resource<WorkspaceAttributes>>>, Failure> {
    require_token(&headers)?;
    let workspaces = db.read().await;
    workspaces
        .get(&id)
        .map(|ws| Json(Document { data: ws.to_resource() }))
        .ok_or_else(|| failure(StatusCode::NOT_FOUND, "not found"))
}

async fn update_workspace(
    State(db): State<Db>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Document<Resource<WorkspaceAttributes>>>, Failure> {
    require_token(&headers)?;
    let input: Document<Resource<UpdateAttributes>> = parse_document(&headers, &body)?;
    let mut workspaces = db.write().await;
    let workspace = workspaces
        .get_mut(&id)
        .ok_or_else(|| failure(StatusCode::NOT_FOUND, "not found"))?;
    if let Some(name) = input.data.attributes.name {
        workspace.name = name;
    }
    if let Some(auto_apply) = input.data.attributes.auto_apply {
        workspace.auto_apply = auto_apply;
    }
    Ok(Json(Document {
        data: workspace.to_resource(),
    }))
}

async fn delete_workspace(
    State(db): State<Db>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<StatusCode, Failure> {
    require_token(&headers)?;
    let mut workspaces = db.write().await;
    workspaces
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| failure(StatusCode::NOT_FOUND, "not found"))
}

/// Reflects the request: body bytes verbatim, method and selected headers
/// as `x-echo-*` response headers.
async fn echo(method: Method, headers: HeaderMap, body: Bytes) -> impl IntoResponse {
    let reflect = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    };
    (
        [
            ("x-echo-method", method.as_str().to_string()),
            ("x-echo-authorization", reflect(header::AUTHORIZATION)),
            ("x-echo-content-type", reflect(header::CONTENT_TYPE)),
        ],
        body,
    )
}

/// Answers with the requested final status. Informational 1xx codes cannot
/// end an exchange and are refused.
async fn status(Path(code): Path<u16>) -> Result<Failure, StatusCode> {
    if code < 200 {
        return Err(StatusCode::BAD_REQUEST);
    }
    let status = StatusCode::from_u16(code).map_err(|_| StatusCode::BAD_REQUEST)?;
    Ok(failure(status, status.canonical_reason().unwrap_or("status")))
}
