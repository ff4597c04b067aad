use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::{DrawStatus, draw_entity, ticket_entity};

/// 购买彩票请求
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateTicketRequest {
    /// 期次ID
    pub draw_id: i64,
    /// 5 个 1-36 之间互不重复的号码，顺序任意
    pub numbers: Vec<i64>,
}

/// 期次信息
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DrawResponse {
    pub id: i64,
    pub status: DrawStatus,
    /// 中奖号码（规范化字符串），仅关闭后返回
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winning_numbers: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<DateTime<Utc>>,
}

impl From<draw_entity::Model> for DrawResponse {
    fn from(m: draw_entity::Model) -> Self {
        DrawResponse {
            id: m.id,
            status: m.status,
            winning_numbers: m.winning_numbers.filter(|w| !w.is_empty()),
            created_at: m.created_at,
            closed_at: m.closed_at,
        }
    }
}

/// 彩票信息
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TicketResponse {
    pub id: i64,
    pub draw_id: i64,
    /// 规范化号码，例如 "3,7,12,19,36"
    pub numbers: String,
    /// 是否中奖，仅在已关闭期次的结果中返回
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_winner: Option<bool>,
}

impl From<ticket_entity::Model> for TicketResponse {
    fn from(m: ticket_entity::Model) -> Self {
        TicketResponse {
            id: m.id,
            draw_id: m.draw_id,
            numbers: m.numbers,
            is_winner: None,
        }
    }
}

/// 期次开奖结果
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DrawResultsResponse {
    pub draw: DrawResponse,
    /// 解析后的中奖号码，期次未关闭时不返回
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winning_numbers: Option<Vec<i32>>,
    pub tickets: Vec<TicketResponse>,
    pub winner_count: i64,
}
