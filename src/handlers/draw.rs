use crate::models::*;
use crate::services::{DrawService, TicketService};
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    post,
    path = "/draws",
    tag = "draw",
    responses(
        (status = 201, description = "创建期次成功", body = DrawResponse),
        (status = 409, description = "已存在进行中的期次")
    )
)]
/// 创建新期次（全局同时只能有一个 active 期次）
pub async fn create_draw(service: web::Data<DrawService>) -> Result<HttpResponse> {
    match service.create_draw().await {
        Ok(draw) => Ok(HttpResponse::Created().json(ApiResponse::success(draw))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/draws",
    tag = "draw",
    responses(
        (status = 200, description = "获取期次列表成功", body = [DrawResponse])
    )
)]
/// 全部期次（倒序）
pub async fn get_draws(service: web::Data<DrawService>) -> Result<HttpResponse> {
    match service.get_all_draws().await {
        Ok(list) => Ok(HttpResponse::Ok().json(ApiResponse::success(list))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/draws/{draw_id}",
    tag = "draw",
    params(
        ("draw_id" = i64, Path, description = "期次ID")
    ),
    responses(
        (status = 200, description = "获取期次成功", body = DrawResponse),
        (status = 400, description = "期次ID格式错误"),
        (status = 404, description = "期次不存在")
    )
)]
pub async fn get_draw(
    service: web::Data<DrawService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match service.get_draw(path.into_inner()).await {
        Ok(draw) => Ok(HttpResponse::Ok().json(ApiResponse::success(draw))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/draws/{draw_id}/close",
    tag = "draw",
    params(
        ("draw_id" = i64, Path, description = "期次ID")
    ),
    responses(
        (status = 200, description = "关闭期次并开奖成功", body = DrawResponse),
        (status = 404, description = "期次不存在"),
        (status = 409, description = "期次已关闭")
    )
)]
/// 关闭期次并生成中奖号码
pub async fn close_draw(
    service: web::Data<DrawService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match service.close_draw(path.into_inner()).await {
        Ok(draw) => Ok(HttpResponse::Ok().json(ApiResponse::success(draw))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/draws/{draw_id}/results",
    tag = "draw",
    params(
        ("draw_id" = i64, Path, description = "期次ID")
    ),
    responses(
        (status = 200, description = "获取开奖结果成功", body = DrawResultsResponse),
        (status = 404, description = "期次不存在")
    )
)]
/// 开奖结果: 已关闭期次返回中奖号码、每张彩票是否中奖以及中奖数量
pub async fn get_results(
    service: web::Data<TicketService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match service.get_draw_results(path.into_inner()).await {
        Ok(results) => Ok(HttpResponse::Ok().json(ApiResponse::success(results))),
        Err(e) => Ok(e.error_response()),
    }
}

/// 路由配置
pub fn draw_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/draws")
            .route("", web::post().to(create_draw))
            .route("", web::get().to(get_draws))
            .route("/{draw_id}", web::get().to(get_draw))
            .route("/{draw_id}/close", web::post().to(close_draw))
            .route("/{draw_id}/results", web::get().to(get_results)),
    );
}
