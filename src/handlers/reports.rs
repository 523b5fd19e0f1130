use actix_web::{web, HttpResponse};
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::report_service::ReportService;
use crate::domain::report::{CategoryUnits, DailyReport};
use crate::errors::AppError;

use super::wire::serialize_amount;
use super::SharedOrderRepository;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReportParams {
    /// Calendar day as `YYYY-MM-DD`.
    pub data: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UnitsByCategoryResponse {
    pub pizza: i64,
    #[serde(rename = "pizzaDoce")]
    pub sweet_pizza: i64,
    #[serde(rename = "bebida")]
    pub beverage: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DailyReportResponse {
    /// The requested day, echoed back.
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "totalDia", serialize_with = "serialize_amount")]
    #[schema(value_type = f64)]
    pub revenue: BigDecimal,
    #[serde(rename = "vendidosPorTipo")]
    pub units: UnitsByCategoryResponse,
    #[serde(rename = "pedidosCount")]
    pub order_count: usize,
}

impl From<CategoryUnits> for UnitsByCategoryResponse {
    fn from(u: CategoryUnits) -> Self {
        Self {
            pizza: u.pizza,
            sweet_pizza: u.sweet_pizza,
            beverage: u.beverage,
        }
    }
}

impl From<DailyReport> for DailyReportResponse {
    fn from(r: DailyReport) -> Self {
        Self {
            date: r.date.format("%Y-%m-%d").to_string(),
            revenue: r.revenue,
            units: r.units.into(),
            order_count: r.order_count,
        }
    }
}

fn parse_day(raw: Option<&str>) -> Result<NaiveDate, AppError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest("data query required".to_string()))?;
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("data must be YYYY-MM-DD, got '{raw}'")))
}

/// GET /relatorio?data=YYYY-MM-DD
///
/// Order count, revenue and units sold per category for one day.
#[utoipa::path(
    get,
    path = "/relatorio",
    params(ReportParams),
    responses(
        (status = 200, description = "Daily report", body = DailyReportResponse),
        (status = 400, description = "Missing or malformed date"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "relatorio"
)]
pub async fn daily_report(
    service: web::Data<ReportService<SharedOrderRepository>>,
    query: web::Query<ReportParams>,
) -> Result<HttpResponse, AppError> {
    let date = parse_day(query.data.as_deref())?;

    let report = web::block(move || service.daily_report(date))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(DailyReportResponse::from(report)))
}
