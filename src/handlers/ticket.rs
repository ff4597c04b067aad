use crate::models::*;
use crate::services::TicketService;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    post,
    path = "/tickets",
    tag = "ticket",
    request_body = CreateTicketRequest,
    responses(
        (status = 201, description = "购买彩票成功", body = TicketResponse),
        (status = 400, description = "号码不合法或请求格式错误"),
        (status = 404, description = "期次不存在"),
        (status = 409, description = "期次已关闭")
    )
)]
/// 购买彩票: 号码会被规范化为升序逗号分隔的字符串
pub async fn create_ticket(
    service: web::Data<TicketService>,
    req: web::Json<CreateTicketRequest>,
) -> Result<HttpResponse> {
    match service.create_ticket(req.into_inner()).await {
        Ok(ticket) => Ok(HttpResponse::Created().json(ApiResponse::success(ticket))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn ticket_config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/tickets").route("", web::post().to(create_ticket)));
}
