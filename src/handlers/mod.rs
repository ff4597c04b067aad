pub mod draw;
pub mod ticket;

use crate::error::AppError;
use actix_web::web;

pub use draw::draw_config;
pub use ticket::ticket_config;

/// 请求体 / 路径参数解析失败时统一返回 400
pub fn extractor_config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| {
                log::warn!("Invalid JSON body: {err}");
                AppError::ValidationError("Invalid JSON".into()).into()
            }),
    )
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        log::warn!("Invalid path parameter: {err}");
        AppError::ValidationError("Invalid draw ID".into()).into()
    }));
}

/// 全部业务路由
pub fn lottery_config(cfg: &mut web::ServiceConfig) {
    cfg.configure(extractor_config)
        .configure(draw_config)
        .configure(ticket_config);
}
