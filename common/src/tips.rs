//! 健康アドバイス
//!
//! 記録1件のたんぱく質・炭水化物・食物繊維から、しきい値ベースの
//! アドバイスを返す。各ルールは独立に評価する（複数同時に該当しうる）。

use crate::types::LogRecord;
use serde::Serialize;
use std::fmt;

/// たんぱく質の下限 (g)
pub const PROTEIN_MIN_G: f64 = 15.0;

/// 炭水化物の上限 (g)
pub const CARBS_MAX_G: f64 = 70.0;

/// 食物繊維の下限 (g)
pub const FIBER_MIN_G: f64 = 5.0;

/// アドバイス種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tip {
    /// たんぱく質不足
    MoreProtein,
    /// 炭水化物過多
    BalanceCarbs,
    /// 食物繊維不足
    MoreFiber,
}

impl Tip {
    pub fn message(&self) -> &'static str {
        match self {
            Tip::MoreProtein => "筋肉の回復のため、赤身のたんぱく質を増やしましょう。",
            Tip::BalanceCarbs => "炭水化物が多めの食事です。全粒穀物でバランスを取りましょう。",
            Tip::MoreFiber => "野菜や果物を加えて食物繊維を補いましょう。",
        }
    }
}

impl fmt::Display for Tip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// 記録からアドバイスを生成
///
/// 比較は厳密（たんぱく質15g・炭水化物70g・食物繊維5g ちょうどは該当しない）。
pub fn health_tips(record: &LogRecord) -> Vec<Tip> {
    let mut tips = Vec::new();

    if record.protein < PROTEIN_MIN_G {
        tips.push(Tip::MoreProtein);
    }
    if record.carbs > CARBS_MAX_G {
        tips.push(Tip::BalanceCarbs);
    }
    if record.fiber < FIBER_MIN_G {
        tips.push(Tip::MoreFiber);
    }

    tips
}
