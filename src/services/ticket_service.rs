use crate::entities::{DrawStatus, draw_entity as draws, ticket_entity as tickets};
use crate::error::{AppError, AppResult};
use crate::models::{CreateTicketRequest, DrawResultsResponse, TicketResponse};
use crate::repositories::{DrawRepository, TicketRepository};
use crate::services::draw_service::{DRAW_NOT_ACTIVE, DRAW_NOT_FOUND};
use crate::utils::{NUMBERS_PER_TICKET, format_numbers, parse_numbers, validate_ticket_numbers};
use sea_orm::{DatabaseConnection, TransactionTrait};

/// 彩票购买与结算
#[derive(Clone)]
pub struct TicketService {
    pool: DatabaseConnection,
}

impl TicketService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 购买彩票
    ///
    /// 1. 校验号码（数量 / 范围 / 重复），失败不触碰数据库
    /// 2. 期次必须存在且为 Active
    /// 3. 号码规范化后落库
    /// 4. 同一事务内对期次加共享锁再确认一次状态，期间并发的关闭要么先提交
    ///    （本次返回 Conflict 并回滚），要么等待本事务提交
    pub async fn create_ticket(&self, req: CreateTicketRequest) -> AppResult<TicketResponse> {
        validate_ticket_numbers(&req.numbers)?;

        let draw = DrawRepository::find_by_id(&self.pool, req.draw_id)
            .await?
            .ok_or_else(|| AppError::NotFound(DRAW_NOT_FOUND.into()))?;

        if !draw.is_active() {
            return Err(AppError::Conflict(DRAW_NOT_ACTIVE.into()));
        }

        let txn = self.pool.begin().await?;

        let ticket =
            TicketRepository::create(&txn, draw.id, format_numbers(&req.numbers)).await?;

        let still_active = DrawRepository::find_by_id_shared(&txn, draw.id)
            .await?
            .is_some_and(|d| d.is_active());
        if !still_active {
            return Err(AppError::Conflict(DRAW_NOT_ACTIVE.into()));
        }

        txn.commit().await?;

        log::info!(
            "Ticket {} created for draw {} with numbers {}",
            ticket.id,
            ticket.draw_id,
            ticket.numbers
        );
        Ok(ticket.into())
    }

    /// 查询期次结果（已关闭期次附带中奖判定）
    pub async fn get_draw_results(&self, draw_id: i64) -> AppResult<DrawResultsResponse> {
        let draw = DrawRepository::find_by_id(&self.pool, draw_id)
            .await?
            .ok_or_else(|| AppError::NotFound(DRAW_NOT_FOUND.into()))?;

        let ticket_list = TicketRepository::find_by_draw_id(&self.pool, draw_id).await?;

        Ok(settle(draw, ticket_list))
    }
}

/// 结算: 仅当彩票规范化号码与中奖号码字符串完全一致时中奖（5 个全中）
///
/// Active 期次不返回中奖号码，也不标注中奖状态。
pub fn settle(draw: draws::Model, ticket_list: Vec<tickets::Model>) -> DrawResultsResponse {
    let winning = match (&draw.status, draw.winning_numbers.as_deref()) {
        (DrawStatus::Closed, Some(w)) if !w.is_empty() => Some(w.to_string()),
        _ => None,
    };

    let mut ticket_responses: Vec<TicketResponse> =
        ticket_list.into_iter().map(Into::into).collect();

    let Some(winning) = winning else {
        return DrawResultsResponse {
            draw: draw.into(),
            winning_numbers: None,
            tickets: ticket_responses,
            winner_count: 0,
        };
    };

    let parsed = parse_numbers(&winning);
    if parsed.len() != NUMBERS_PER_TICKET {
        log::warn!(
            "Draw {} has malformed winning numbers {:?}, parsed {} values",
            draw.id,
            winning,
            parsed.len()
        );
    }

    let mut winner_count = 0;
    for ticket in ticket_responses.iter_mut() {
        let is_winner = ticket.numbers == winning;
        if is_winner {
            winner_count += 1;
        }
        ticket.is_winner = Some(is_winner);
    }

    DrawResultsResponse {
        draw: draw.into(),
        winning_numbers: Some(parsed),
        tickets: ticket_responses,
        winner_count,
    }
}
