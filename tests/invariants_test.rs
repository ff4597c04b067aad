mod common;

use lottery_backend::entities::DrawStatus;
use lottery_backend::utils::{SecureSampler, parse_numbers, validate_ticket_numbers};
use lottery_backend::{AppError, models::CreateTicketRequest};
use std::sync::Arc;
use tokio::task::JoinSet;

/// 多轮 创建 / 投注 / 开奖 之后，任何时刻最多只有一个 active 期次
#[tokio::test]
async fn test_single_active_draw_across_rounds() {
    let (draws, tickets) = common::services(Arc::new(SecureSampler)).await;

    for round in 0..10 {
        let draw = draws.create_draw().await.unwrap();
        assert!(matches!(
            draws.create_draw().await.unwrap_err(),
            AppError::Conflict(_)
        ));

        let all = draws.get_all_draws().await.unwrap();
        assert_eq!(all.len(), round + 1);
        assert_eq!(
            all.iter().filter(|d| d.status == DrawStatus::Active).count(),
            1
        );

        tickets
            .create_ticket(CreateTicketRequest {
                draw_id: draw.id,
                numbers: vec![1, 9, 17, 25, 33],
            })
            .await
            .unwrap();

        let closed = draws.close_draw(draw.id).await.unwrap();
        let winning = parse_numbers(closed.winning_numbers.as_deref().unwrap());
        assert!(validate_ticket_numbers(&winning).is_ok());

        let results = tickets.get_draw_results(draw.id).await.unwrap();
        let expected = i64::from(closed.winning_numbers.as_deref() == Some("1,9,17,25,33"));
        assert_eq!(results.winner_count, expected);
    }

    let all = draws.get_all_draws().await.unwrap();
    assert!(all.iter().all(|d| d.status == DrawStatus::Closed));
}

/// 多连接文件库上并发创建期次: 恰好一个成功，其余全部为 Conflict
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_create_draw_yields_single_active() {
    let (_dir, db) = common::file_db(8).await;
    let (draws, _) = common::services_on(db, Arc::new(SecureSampler));

    let mut set = JoinSet::new();
    for _ in 0..8 {
        let draws = draws.clone();
        set.spawn(async move { draws.create_draw().await });
    }

    let mut created = 0;
    while let Some(joined) = set.join_next().await {
        match joined.unwrap() {
            Ok(_) => created += 1,
            Err(AppError::Conflict(_)) => {}
            Err(other) => panic!("unexpected error under contention: {other}"),
        }
    }
    assert_eq!(created, 1);

    let all = draws.get_all_draws().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].status, DrawStatus::Active);
}

/// 并发关闭与投注: 只有一次关闭成功，失败方一律 Conflict，
/// 结果中只包含成功购买的彩票
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_close_and_ticket_purchase() {
    let (_dir, db) = common::file_db(8).await;
    let (draws, tickets) = common::services_on(db, Arc::new(SecureSampler));
    let draw_id = draws.create_draw().await.unwrap().id;

    let mut closes = JoinSet::new();
    let mut purchases = JoinSet::new();
    for i in 0..4 {
        let draws = draws.clone();
        closes.spawn(async move { draws.close_draw(draw_id).await });

        let tickets = tickets.clone();
        purchases.spawn(async move {
            tickets
                .create_ticket(CreateTicketRequest {
                    draw_id,
                    numbers: vec![1 + i, 10 + i, 19 + i, 28 + i, 33],
                })
                .await
        });
    }

    let mut closed = 0;
    while let Some(joined) = closes.join_next().await {
        match joined.unwrap() {
            Ok(draw) => {
                assert_eq!(draw.status, DrawStatus::Closed);
                closed += 1;
            }
            Err(AppError::Conflict(_)) => {}
            Err(other) => panic!("unexpected close error under contention: {other}"),
        }
    }
    assert_eq!(closed, 1);

    let mut accepted = Vec::new();
    while let Some(joined) = purchases.join_next().await {
        match joined.unwrap() {
            Ok(ticket) => accepted.push(ticket.id),
            Err(AppError::Conflict(_)) => {}
            Err(other) => panic!("unexpected ticket error under contention: {other}"),
        }
    }

    let results = tickets.get_draw_results(draw_id).await.unwrap();
    assert_eq!(results.draw.status, DrawStatus::Closed);
    let mut stored: Vec<i64> = results.tickets.iter().map(|t| t.id).collect();
    stored.sort_unstable();
    accepted.sort_unstable();
    assert_eq!(stored, accepted);
}
