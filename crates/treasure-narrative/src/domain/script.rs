//! Narrative text and pacing for every stage.

use std::time::Duration;

const fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

pub const WELCOME: [&str; 2] = ["🎮 欢迎来到增强版寻宝游戏！", "你的目标是找到传说中的失落宝藏..."];

/// Prefix of the terminal error entry; the failure message follows.
pub const GAME_OVER_PREFIX: &str = "💀 游戏结束: ";

pub mod ruins {
    use super::{Duration, ms};

    pub const HEADING: &str = "🏛️ 你来到了传说中的古代遗迹群...";
    pub const LINES: [(Duration, &str); 2] = [
        (ms(1000), "古老的石柱上刻满了神秘的符号，它们在月光下闪闪发光..."),
        (ms(1500), "突然，你发现了一个隐藏的入口！"),
    ];
}

pub mod puzzle {
    use super::{Duration, ms};

    pub const HEADING: &str = "🧩 你需要解开古代的符号谜题...";
    pub const SYMBOLS: [&str; 5] = ["☀", "🌙", "⭐", "🌊", "🔥"];
    pub const HINT_SUFFIX: &str = "隐藏着时间的秘密...";
    pub const STUDY: Duration = ms(2000);
    pub const ATTEMPT: Duration = ms(800);
    pub const SOLVED: &str = "✨ 恭喜！你成功解开了古代谜题！";
    pub const REWARD: Duration = ms(1000);
    pub const WRONG: &str = "❌ 这个顺序不太对...再试试看";
    pub const RETRY: Duration = ms(500);
    pub const FAILURE: &str = "谜题太难了！你需要更仔细地观察...";

    /// The hint line listing the symbols in order.
    #[must_use]
    pub fn hint() -> String {
        format!("符号提示: {} {HINT_SUFFIX}", SYMBOLS.join(" → "))
    }

    /// The line written at the start of attempt `n` (1-based).
    #[must_use]
    pub fn attempt(n: u32) -> String {
        format!("尝试 {n}: 解读符号序列...")
    }
}

pub mod maze {
    use super::{Duration, ms};

    pub const HEADING: &str = "🏔️ 通过谜题后，你进入了神秘的地下迷宫...";
    pub const LINES: [(Duration, &str); 2] = [
        (ms(1500), "迷宫墙壁上闪烁着微弱的荧光，你听到了远处传来的神秘声音..."),
        (ms(2000), "你遇到了一个三叉路口，每个方向都充满未知..."),
    ];
}

pub mod guardians {
    use super::{Duration, ms};

    pub const HEADING: &str = "⚔️ 迷宫深处潜藏着危险...";
    pub const AMBUSH: (Duration, &str) = (ms(1000), "突然！一只巨大的石像守卫出现在你面前！");
    pub const DECIDE: Duration = ms(1500);

    pub const ATTACKED: &str = "石像守卫发动了攻击！你必须找到它的弱点...";
    pub const COUNTER: Duration = ms(2000);
    pub const KEY_REMEMBERED: &str = "你想起了神秘钥匙的光芒，也许它能帮助...";
    pub const KEY_GLOWS: (Duration, &str) = (ms(1000), "✨ 钥匙发出光芒，石像守卫被感化了！");
    pub const BLESSING_GRANTED: Duration = ms(800);
    pub const DEFEAT: &str = "你被石像守卫击败了...需要更强的装备！";

    pub const EVADED: &str = "🎯 你巧妙地避开了所有的陷阱！";
    pub const POTION_FOUND: (Duration, &str) = (ms(1000), "发现了一瓶古老的药剂...");
    pub const POTION_GRANTED: Duration = ms(800);
}

pub mod mechanism {
    use super::{Duration, ms};

    pub const HEADING: &str = "🎯 你来到了宝藏的入口，但需要解开最后的机关...";
    pub const DEVICE: (Duration, &str) =
        (ms(1500), "一个复杂的机械装置出现在你面前，需要正确的顺序激活...");
    pub const BEFORE_STEPS: Duration = ms(2000);
    pub const STEPS: [&str; 4] = [
        "观察机关的构造...",
        "找到启动按钮...",
        "输入正确的密码...",
        "激活最后的机关...",
    ];
    /// Base delay after each step; a random jitter of up to
    /// [`STEP_JITTER_MS`] milliseconds is added.
    pub const STEP_BASE_MS: u32 = 1200;
    pub const STEP_JITTER_MS: u32 = 800;

    pub const WITH_KEY: [&str; 2] = ["🔑 神秘钥匙完美地契合了机关的锁孔！", "🎉 机关被成功激活！"];
    pub const WITHOUT_KEY: [&str; 2] = [
        "没有合适的钥匙...你需要一个特殊的工具",
        "你用智慧和耐心找到了另一种方法...",
    ];
    pub const BRANCH_PAUSE: Duration = ms(1000);

    /// The line for step `index` (0-based).
    #[must_use]
    pub fn step(index: usize, text: &str) -> String {
        format!("步骤 {}: {text}", index + 1)
    }
}

pub mod treasure {
    use super::{Duration, ms};

    pub const HEADING: &str = "🏆 最后的时刻到来了...";
    pub const LINES: [(Duration, &str); 3] = [
        (ms(1500), "随着机关的激活，一扇巨大的石门缓缓打开..."),
        (ms(2000), "💎 眼前出现了一个闪闪发光的宝库！"),
        (ms(1500), "你发现的不只是黄金珠宝，还有古代的智慧和知识..."),
    ];
    pub const REVEAL: Duration = ms(2000);
    pub const TREASURES: [&str; 5] = [
        "💰 闪闪发光的古代金币",
        "📜 记载着失落文明的古籍",
        "🎭 精美的古代面具",
        "⚡ 神秘的能量水晶",
        "🌟 传说中的英雄之剑",
    ];
    pub const CELEBRATE: Duration = ms(1500);
    pub const VICTORY: &str = "🎊 恭喜你！你成功完成了这个史诗般的寻宝冒险！";

    /// The line announcing one treasure.
    #[must_use]
    pub fn found(treasure: &str) -> String {
        format!("发现宝藏: {treasure}")
    }
}

/// The line announcing an acquired item, e.g. `获得道具：🔑 神秘钥匙`.
#[must_use]
pub fn item_acquired(icon: &str, name: &str) -> String {
    format!("获得道具：{icon} {name}")
}

/// The line announcing an acquired blessing.
#[must_use]
pub fn blessing_acquired(icon: &str, name: &str) -> String {
    format!("获得祝福：{icon} {name}")
}

/// The terminal error line for a failed run.
#[must_use]
pub fn game_over(message: &str) -> String {
    format!("{GAME_OVER_PREFIX}{message}")
}
