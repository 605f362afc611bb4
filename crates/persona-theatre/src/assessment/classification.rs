use super::domain::{AnimalTag, ArchetypeResult, ScoreVector};

/// Composite leaning toward distance and self-protection. Computed on demand
/// so it can never go stale against a recomputed score vector.
pub(crate) fn dark_score(scores: &ScoreVector) -> i32 {
    (100 - i32::from(scores.trust)) + (100 - i32::from(scores.stability)) + i32::from(scores.autonomy)
}

/// Composite leaning toward steadiness and devotion.
pub(crate) fn purity_score(scores: &ScoreVector) -> i32 {
    i32::from(scores.stability) + i32::from(scores.trust) + (100 - i32::from(scores.openness))
}

struct TagRule {
    applies: fn(&ScoreVector) -> bool,
    tag: AnimalTag,
}

// Ordered threshold table; the first satisfied row wins and no later row is
// consulted. Deer is the default when nothing matches.
static TAG_RULES: [TagRule; 5] = [
    TagRule {
        applies: |s: &ScoreVector| s.autonomy > 60 && s.trust < 45 && s.stability > 55,
        tag: AnimalTag::Wolf,
    },
    TagRule {
        applies: |s: &ScoreVector| s.autonomy > 55 && s.expression < 45 && s.openness > 50,
        tag: AnimalTag::Cat,
    },
    TagRule {
        applies: |s: &ScoreVector| s.intimacy > 60 && s.autonomy < 45 && s.trust > 50,
        tag: AnimalTag::Rabbit,
    },
    TagRule {
        applies: |s: &ScoreVector| s.openness > 60 && s.stability < 50 && s.expression > 50,
        tag: AnimalTag::Fox,
    },
    TagRule {
        applies: |s: &ScoreVector| s.stability > 60 && s.expression < 50 && s.openness < 50,
        tag: AnimalTag::Owl,
    },
];

/// Deterministic, total mapping from a score vector to its animal tag.
pub fn animal_tag(scores: &ScoreVector) -> AnimalTag {
    TAG_RULES
        .iter()
        .find(|rule| (rule.applies)(scores))
        .map(|rule| rule.tag)
        .unwrap_or(AnimalTag::Deer)
}

/// Inputs visible to an archetype rule predicate.
pub(crate) struct RuleSignals {
    pub(crate) animal: AnimalTag,
    pub(crate) dark_score: i32,
    pub(crate) purity_score: i32,
    pub(crate) scores: ScoreVector,
}

/// Static narrative attached to a rule. `animal: None` defers to the tag
/// computed for the vector being classified.
struct ArchetypeSheet {
    title: &'static str,
    subtitle: &'static str,
    animal: Option<AnimalTag>,
    profile: &'static str,
    blind_spot: &'static str,
    soul_match: &'static str,
    keywords: &'static [&'static str],
    compatibility: u8,
    detail_analysis: &'static str,
}

impl ArchetypeSheet {
    fn materialize(&self, computed_tag: AnimalTag) -> ArchetypeResult {
        ArchetypeResult {
            title: self.title,
            subtitle: self.subtitle,
            animal: self.animal.unwrap_or(computed_tag),
            profile: self.profile,
            blind_spot: self.blind_spot,
            soul_match: self.soul_match,
            keywords: self.keywords,
            compatibility: self.compatibility,
            detail_analysis: self.detail_analysis,
        }
    }
}

struct ArchetypeRule {
    applies: fn(&RuleSignals) -> bool,
    sheet: ArchetypeSheet,
}

// Declaration order is part of the contract: predicates are not mutually
// exclusive, and the earliest satisfied rule decides the archetype.
static ARCHETYPE_RULES: [ArchetypeRule; 7] = [
    ArchetypeRule {
        applies: |signals: &RuleSignals| signals.animal == AnimalTag::Wolf && signals.dark_score > 180,
        sheet: ArchetypeSheet {
            title: "荒原独狼",
            subtitle: "The Lone Wolf of Wasteland",
            animal: Some(AnimalTag::Wolf),
            profile: "你坐在关系的边界线上，一只脚踏入，一只脚随时准备撤退。你的爱是有条件的忠诚——条件是：不被驯服。",
            blind_spot: "你总以为距离产生美，殊不知距离也产生误解。当你忙着保护自己的领地时，对方可能已经在门外等得太久，转身离开了。",
            soul_match: "能够尊重你边界、不试图改变你、却又能在关键时刻让你感到被需要的人。大概率是另一只温和的狼，或者一只懂得等待的猫。",
            keywords: &["独立", "警惕", "领地", "忠诚", "距离感", "保护欲", "不妥协"],
            compatibility: 65,
            detail_analysis: "你的爱像狼群的法则——等级分明，边界清晰。你不是不会爱，而是太懂得保护自己。这让你在关系中显得强大，却也可能让真心靠近的人望而却步。试着偶尔放下戒备，让某个人看见城墙后面那个也会受伤的你。",
        },
    },
    ArchetypeRule {
        applies: |signals: &RuleSignals| signals.animal == AnimalTag::Cat && signals.dark_score > 160,
        sheet: ArchetypeSheet {
            title: "优雅的掠食者",
            subtitle: "The Elegant Predator",
            animal: Some(AnimalTag::Cat),
            profile: "你在关系中扮演的是那个「看起来不在乎」的角色，但你的眼睛从未离开过猎物。你用漫不经心掩盖专注，用冷淡包装深情。",
            blind_spot: "你太擅长隐藏了，以至于连自己都忘了在演戏。当你终于想表达真心时，对方可能已经习惯了你的「不在乎」，不再相信任何温柔。",
            soul_match: "一个能看穿你伪装、却不拆穿你的人。最好是足够敏感能读懂你的信号，又足够强大不会被你的冷淡吓跑。",
            keywords: &["矜持", "观察", "伪装", "优雅", "距离", "试探", "高傲"],
            compatibility: 58,
            detail_analysis: "你是恋爱中的策略家，每一步都精心计算。这让你很少受伤，但也让你很少真正快乐。你最大的恐惧不是被拒绝，而是被看穿——被看穿之后，还能被接受吗？答案是：能。试着让某个人看见真实的你。",
        },
    },
    ArchetypeRule {
        applies: |signals: &RuleSignals| {
            signals.animal == AnimalTag::Rabbit && signals.purity_score > 200
        },
        sheet: ArchetypeSheet {
            title: "被写好的剧本",
            subtitle: "The Scripted Dreamer",
            animal: Some(AnimalTag::Rabbit),
            profile: "你是爱情故事里最虔诚的读者，相信每一个童话结局，愿意为浪漫付出一切。你坐在第一排，举着最大的荧光棒，等待属于你的主角出场。",
            blind_spot: "你太想要一个完美的爱情故事了，以至于忽略了现实中的人都是带着缺陷的。当对方无法满足你的剧本期待时，你会失望，而不是调整剧本。",
            soul_match: "一个愿意和你一起相信童话、却也能在必要时把你拉回现实的人。大概率是一个温柔但有主见的存在。",
            keywords: &["浪漫", "理想", "纯真", "期待", "脆弱", "信任", "付出"],
            compatibility: 72,
            detail_analysis: "你的爱是无条件的给予，这是你最美的地方，也是最危险的地方。你需要学会的不是如何少爱一点，而是如何爱得更聪明一点。不是每个人都值得你掏心掏肺，但值得的那个人，会让你的付出得到回报。",
        },
    },
    ArchetypeRule {
        applies: |signals: &RuleSignals| {
            signals.animal == AnimalTag::Fox
                && signals.scores.openness > 60
                && signals.scores.stability < 45
        },
        sheet: ArchetypeSheet {
            title: "镜厅的舞者",
            subtitle: "The Hall of Mirrors Dancer",
            animal: Some(AnimalTag::Fox),
            profile: "你在关系中像一个永远在换面具的舞者，每一面镜子都映射出不同的你。你不是虚伪，只是太擅长适应，以至于忘了哪个才是真正的自己。",
            blind_spot: "你变化太多，让人难以捉摸，也让人难以信任。当对方想要抓住「真正的你」时，你已经换了另一个版本。这不是神秘，这是逃避。",
            soul_match: "一个能够接受你所有版本、却依然追问「真正的你是谁」的人。需要足够的耐心和洞察力。",
            keywords: &["多变", "适应", "神秘", "灵活", "不确定", "魅力", "逃避"],
            compatibility: 55,
            detail_analysis: "你是关系中的变色龙，这让你在社交场合游刃有余，但在亲密关系中却可能迷失。真正的亲密需要固定的自我，而你还在寻找。好消息是，找到那个让你愿意停下脚步的人，你就会找到自己。",
        },
    },
    ArchetypeRule {
        applies: |signals: &RuleSignals| {
            signals.animal == AnimalTag::Owl
                && signals.scores.stability > 60
                && signals.scores.expression < 40
        },
        sheet: ArchetypeSheet {
            title: "剧场的监控者",
            subtitle: "The Theatre Watcher",
            animal: Some(AnimalTag::Owl),
            profile: "你是那个坐在控制室里的人，看着所有的剧情发展，分析每一个演员的动机，却很少走上舞台自己演一场。你太懂爱情的逻辑，却忘了爱情需要的是感觉。",
            blind_spot: "你把理性当作保护伞，用分析代替感受。当你忙着解读对方的每一个行为时，你可能错过了最简单的东西——ta只是想要一个拥抱。",
            soul_match: "一个能够让你放下分析、纯粹去感受的人。需要足够的温暖和耐心，能够融化你的理性防线。",
            keywords: &["理性", "观察", "分析", "克制", "洞察", "距离", "深邃"],
            compatibility: 62,
            detail_analysis: "你是关系中的心理学家，总能看穿表象下的动机。但有时候，爱情不需要被理解，只需要被感受。试着关掉你的分析大脑，让某个人走进你的感觉世界。不是所有的情感都需要被解释。",
        },
    },
    ArchetypeRule {
        applies: |signals: &RuleSignals| {
            signals.animal == AnimalTag::Deer
                && signals.scores.trust < 45
                && signals.scores.intimacy > 55
        },
        sheet: ArchetypeSheet {
            title: "林间的逃逸者",
            subtitle: "The Forest Fugitive",
            animal: Some(AnimalTag::Deer),
            profile: "你渴望被爱，却又随时准备逃跑。你站在关系的入口，想进去又怕受伤，想离开又舍不得。你的爱是一场拉锯战，对手是你自己。",
            blind_spot: "你总是在「想要靠近」和「想要逃跑」之间摇摆，这种不确定让对方精疲力竭。不是所有的爱都会伤害你，但你的防备本身就是一种伤害。",
            soul_match: "一个有无限耐心、能够慢慢证明自己不会伤害你的人。需要稳定、温和、不会给你压力的存在。",
            keywords: &["敏感", "警觉", "矛盾", "渴望", "逃避", "脆弱", "温柔"],
            compatibility: 60,
            detail_analysis: "你的爱像一只惊弓之鸟，一有风吹草动就想飞走。这不是你的错，可能是过去的经历让你学会了自我保护。但请记住：不是所有的亲密都会带来伤害。给自己一个机会，也给那个愿意等你的人一个机会。",
        },
    },
    ArchetypeRule {
        applies: |signals: &RuleSignals| {
            signals.scores.autonomy > 55
                && signals.scores.intimacy > 55
                && signals.scores.stability > 50
        },
        sheet: ArchetypeSheet {
            title: "平衡的行者",
            subtitle: "The Balanced Walker",
            animal: Some(AnimalTag::Fox),
            profile: "你是少数能够在独立与亲密之间找到平衡的人。你知道什么时候该靠近，什么时候该保持距离。你的爱是成熟的，有分寸的，让人舒服的。",
            blind_spot: "你太「正确」了，有时候反而缺少一点疯狂。爱情不是只有理性的平衡，有时候也需要一点不顾一切的冲动。",
            soul_match: "一个能够欣赏你的成熟、偶尔又能带你突破舒适圈的人。最好是一个同样独立、但又能给你惊喜的存在。",
            keywords: &["平衡", "成熟", "理性", "独立", "温暖", "分寸", "稳定"],
            compatibility: 78,
            detail_analysis: "你是关系中的稀缺物种——既不会迷失自己，又能够给予对方足够的爱。这种平衡来之不易，说明你在情感上已经相当成熟。唯一的建议是：偶尔允许自己失控一下，最好的爱情有时需要一点非理性。",
        },
    },
];

// Guarantees totality: every score vector that falls through the rule list
// lands here, tagged with its computed animal.
static FALLBACK_SHEET: ArchetypeSheet = ArchetypeSheet {
    title: "迷雾中的旅人",
    subtitle: "The Misty Traveler",
    animal: None,
    profile: "你还在探索自己在爱情中的位置，每一段关系都是一次新的发现。你没有固定的模式，这既是你的可能性，也是你的迷茫。",
    blind_spot: "你还不太确定自己要什么，这让你在关系中容易被动——要么被对方定义，要么在不同的可能性之间犹豫不决。",
    soul_match: "一个能够帮助你认识自己、同时又能接受你的不确定性的人。最好是一个有耐心的探索者。",
    keywords: &["探索", "不确定", "可能性", "成长", "寻找", "变化", "开放"],
    compatibility: 68,
    detail_analysis: "你是一张还在被书写的纸，这意味着一切皆有可能。不要急于给自己贴标签，也不要急于找到「对的人」。先找到对的自己，对的人自然会出现。",
};

/// Map a score vector to exactly one archetype. Total over the full 0-100
/// domain; the fallback sheet makes exhaustion impossible.
pub fn classify(scores: &ScoreVector) -> ArchetypeResult {
    let signals = RuleSignals {
        animal: animal_tag(scores),
        dark_score: dark_score(scores),
        purity_score: purity_score(scores),
        scores: *scores,
    };

    ARCHETYPE_RULES
        .iter()
        .find(|rule| (rule.applies)(&signals))
        .map(|rule| &rule.sheet)
        .unwrap_or(&FALLBACK_SHEET)
        .materialize(signals.animal)
}

/// Three-tier commentary shown next to the compatibility meter.
pub fn compatibility_note(compatibility: u8) -> &'static str {
    if compatibility >= 70 {
        "你在关系中的自我认知相当成熟，已经具备建立健康关系的基础。"
    } else if compatibility >= 55 {
        "你对关系有一定的理解，但还有成长空间。每一次恋爱都是认识自己的机会。"
    } else {
        "你可能还在探索自己在关系中的定位。不用急，了解自己是一生的功课。"
    }
}
