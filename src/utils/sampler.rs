use super::numbers::{MAX_NUMBER, MIN_NUMBER, NUMBERS_PER_TICKET};
use crate::config::{LotteryConfig, SamplerKind};
use rand::rngs::OsRng;
use rand::seq::index;
use std::sync::Arc;

/// 开奖号码生成器: 返回 5 个 1..=36 之间互不重复的号码（顺序不限）
pub trait NumberSampler: Send + Sync {
    fn sample(&self) -> Vec<i32>;

    fn name(&self) -> &'static str;
}

const LCG_MULTIPLIER: i64 = 1_103_515_245;
const LCG_INCREMENT: i64 = 12_345;
const LCG_MODULUS: i64 = 1 << 31;
/// 正式取号前先推进的步数
const LCG_WARMUP_STEPS: usize = 10;

/// 旧系统兼容的线性同余生成器
///
/// 同一个 seed 每次都会产生同一组号码，仅用于兼容与测试。
#[derive(Debug, Clone)]
pub struct LegacyLcgSampler {
    seed: i64,
}

impl LegacyLcgSampler {
    pub fn new(seed: i64) -> Self {
        Self { seed }
    }

    fn next(seed: i64) -> i64 {
        (seed.wrapping_mul(LCG_MULTIPLIER).wrapping_add(LCG_INCREMENT)).rem_euclid(LCG_MODULUS)
    }
}

impl Default for LegacyLcgSampler {
    fn default() -> Self {
        Self::new(1)
    }
}

impl NumberSampler for LegacyLcgSampler {
    fn sample(&self) -> Vec<i32> {
        let mut seed = self.seed;
        for _ in 0..LCG_WARMUP_STEPS {
            seed = Self::next(seed);
        }

        let span = (MAX_NUMBER - MIN_NUMBER + 1) as i64;
        let mut numbers = Vec::with_capacity(NUMBERS_PER_TICKET);
        while numbers.len() < NUMBERS_PER_TICKET {
            seed = Self::next(seed);
            let num = (seed % span) as i32 + MIN_NUMBER;
            if !numbers.contains(&num) {
                numbers.push(num);
            }
        }
        numbers
    }

    fn name(&self) -> &'static str {
        "legacy"
    }
}

/// 基于操作系统随机源的无放回均匀抽样
#[derive(Debug, Clone, Default)]
pub struct SecureSampler;

impl NumberSampler for SecureSampler {
    fn sample(&self) -> Vec<i32> {
        let span = (MAX_NUMBER - MIN_NUMBER + 1) as usize;
        index::sample(&mut OsRng, span, NUMBERS_PER_TICKET)
            .into_iter()
            .map(|i| i as i32 + MIN_NUMBER)
            .collect()
    }

    fn name(&self) -> &'static str {
        "secure"
    }
}

/// 根据配置选择生成器
pub fn sampler_from_config(config: &LotteryConfig) -> Arc<dyn NumberSampler> {
    match config.sampler {
        SamplerKind::Secure => Arc::new(SecureSampler),
        SamplerKind::Legacy => Arc::new(LegacyLcgSampler::new(config.legacy_seed)),
    }
}
