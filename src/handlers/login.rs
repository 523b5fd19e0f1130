use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::catalog_service::CustomerService;
use crate::domain::ports::CredentialVerifier;
use crate::errors::AppError;

use super::customers::CustomerResponse;
use super::SharedCustomerRepository;

#[derive(Debug, Deserialize, ToSchema)]
pub struct StaffLoginRequest {
    pub login: String,
    #[serde(rename = "senha")]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StaffLoginResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CustomerLoginRequest {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "telefone")]
    pub phone: String,
}

/// POST /login/funcionario
#[utoipa::path(
    post,
    path = "/login/funcionario",
    request_body = StaffLoginRequest,
    responses(
        (status = 200, description = "Credentials accepted", body = StaffLoginResponse),
        (status = 401, description = "Credentials rejected", body = StaffLoginResponse),
    ),
    tag = "login"
)]
pub async fn staff_login(
    verifier: web::Data<dyn CredentialVerifier>,
    body: web::Json<StaffLoginRequest>,
) -> HttpResponse {
    if verifier.verify(&body.login, &body.password) {
        HttpResponse::Ok().json(StaffLoginResponse {
            ok: true,
            error: None,
        })
    } else {
        log::info!("staff login refused for '{}'", body.login);
        HttpResponse::Unauthorized().json(StaffLoginResponse {
            ok: false,
            error: Some("Credenciais inválidas".to_string()),
        })
    }
}

/// POST /login/cliente
///
/// Finds a returning customer by name (any case) and phone.
#[utoipa::path(
    post,
    path = "/login/cliente",
    request_body = CustomerLoginRequest,
    responses(
        (status = 200, description = "Customer found", body = CustomerResponse),
        (status = 404, description = "No matching customer"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "login"
)]
pub async fn customer_login(
    service: web::Data<CustomerService<SharedCustomerRepository>>,
    body: web::Json<CustomerLoginRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();

    let customer = web::block(move || service.identify(&body.name, &body.phone))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(CustomerResponse::from(customer)))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::{json, Value};

    use crate::domain::catalog::NewCustomer;
    use crate::domain::ports::CustomerRepository;
    use crate::handlers::{configure, test_app};
    use crate::test_support::InMemoryStore;

    #[actix_web::test]
    async fn staff_login_accepts_configured_credentials() {
        let store = InMemoryStore::new();
        let services = test_app::services(&store);
        let app = test::init_service(App::new().configure(|cfg| configure(cfg, &services))).await;

        let req = test::TestRequest::post()
            .uri("/login/funcionario")
            .set_json(json!({"login": "func", "senha": "1234"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["ok"], true);
    }

    #[actix_web::test]
    async fn staff_login_rejects_wrong_password() {
        let store = InMemoryStore::new();
        let services = test_app::services(&store);
        let app = test::init_service(App::new().configure(|cfg| configure(cfg, &services))).await;

        let req = test::TestRequest::post()
            .uri("/login/funcionario")
            .set_json(json!({"login": "func", "senha": "0000"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["ok"], false);
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn customer_login_matches_name_case_insensitively() {
        let store = InMemoryStore::new();
        CustomerRepository::create(
            &store,
            NewCustomer {
                name: "Carla Dias".to_string(),
                phone: "3177".to_string(),
                address: "Av. Central, 5".to_string(),
            },
        )
        .unwrap();
        let services = test_app::services(&store);
        let app = test::init_service(App::new().configure(|cfg| configure(cfg, &services))).await;

        let req = test::TestRequest::post()
            .uri("/login/cliente")
            .set_json(json!({"nome": "carla dias", "telefone": "3177"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["nome"], "Carla Dias");
        assert_eq!(body["endereco"], "Av. Central, 5");

        let req = test::TestRequest::post()
            .uri("/login/cliente")
            .set_json(json!({"nome": "Carla Dias", "telefone": "0000"}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }
}
