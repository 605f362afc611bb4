use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One axis of the six-axis personality measurement. Closed set; not
/// extensible at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Openness,
    Stability,
    Intimacy,
    Autonomy,
    Expression,
    Trust,
}

impl Dimension {
    pub const ALL: [Dimension; 6] = [
        Dimension::Openness,
        Dimension::Stability,
        Dimension::Intimacy,
        Dimension::Autonomy,
        Dimension::Expression,
        Dimension::Trust,
    ];

    /// Display label used on the result radar chart.
    pub const fn label(self) -> &'static str {
        match self {
            Dimension::Openness => "开放性",
            Dimension::Stability => "情绪稳定",
            Dimension::Intimacy => "亲密需求",
            Dimension::Autonomy => "独立自主",
            Dimension::Expression => "情感表达",
            Dimension::Trust => "信任倾向",
        }
    }
}

/// Thematic grouping for a question. Styling input only; scoring never
/// consults it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionTheme {
    Identity,
    Shadow,
    Emotion,
    Desire,
    Boundary,
    Attachment,
    Conflict,
    Intimacy,
    Future,
}

impl QuestionTheme {
    pub const fn label(self) -> &'static str {
        match self {
            QuestionTheme::Identity => "身份认同",
            QuestionTheme::Shadow => "阴影面",
            QuestionTheme::Emotion => "情感倾向",
            QuestionTheme::Desire => "欲望",
            QuestionTheme::Boundary => "边界感",
            QuestionTheme::Attachment => "依恋模式",
            QuestionTheme::Conflict => "冲突处理",
            QuestionTheme::Intimacy => "亲密关系",
            QuestionTheme::Future => "未来愿景",
        }
    }

    /// Solid accent color for the theme, used by result and progress styling.
    pub const fn accent_color(self) -> &'static str {
        match self {
            QuestionTheme::Identity => "#9a8c7e",
            QuestionTheme::Shadow => "#7d8a8c",
            QuestionTheme::Emotion => "#a89590",
            QuestionTheme::Desire => "#8e9a7d",
            QuestionTheme::Boundary => "#998a9a",
            QuestionTheme::Attachment => "#8c9199",
            QuestionTheme::Conflict => "#a08a7a",
            QuestionTheme::Intimacy => "#8a9a90",
            QuestionTheme::Future => "#9a9a8a",
        }
    }
}

/// Identifier wrapper for catalog questions; ordering defines quiz order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionId(pub u16);

/// Immutable quiz item with its four answer options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub theme: QuestionTheme,
    pub prompt: &'static str,
    pub options: Vec<AnswerOption>,
}

/// One selectable answer and its contribution to every dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub text: &'static str,
    pub weights: WeightVector,
}

/// Per-dimension contribution of a single option. Every dimension is present
/// by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeightVector {
    pub openness: u8,
    pub stability: u8,
    pub intimacy: u8,
    pub autonomy: u8,
    pub expression: u8,
    pub trust: u8,
}

impl WeightVector {
    /// Order: openness, stability, intimacy, autonomy, expression, trust.
    pub const fn new(weights: [u8; 6]) -> Self {
        Self {
            openness: weights[0],
            stability: weights[1],
            intimacy: weights[2],
            autonomy: weights[3],
            expression: weights[4],
            trust: weights[5],
        }
    }

    pub const fn get(self, dimension: Dimension) -> u8 {
        match dimension {
            Dimension::Openness => self.openness,
            Dimension::Stability => self.stability,
            Dimension::Intimacy => self.intimacy,
            Dimension::Autonomy => self.autonomy,
            Dimension::Expression => self.expression,
            Dimension::Trust => self.trust,
        }
    }
}

/// Recorded choices: question id to 0-based option index. Built by the
/// caller one answer at a time; the engine treats it as a read-only snapshot.
pub type AnswerMap = BTreeMap<QuestionId, usize>;

/// Normalized 0-100 standing per dimension, recomputed on demand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreVector {
    pub openness: u8,
    pub stability: u8,
    pub intimacy: u8,
    pub autonomy: u8,
    pub expression: u8,
    pub trust: u8,
}

impl ScoreVector {
    pub const fn get(self, dimension: Dimension) -> u8 {
        match dimension {
            Dimension::Openness => self.openness,
            Dimension::Stability => self.stability,
            Dimension::Intimacy => self.intimacy,
            Dimension::Autonomy => self.autonomy,
            Dimension::Expression => self.expression,
            Dimension::Trust => self.trust,
        }
    }

    /// Scores paired with their dimension, in declaration order.
    pub fn entries(self) -> [(Dimension, u8); 6] {
        Dimension::ALL.map(|dimension| (dimension, self.get(dimension)))
    }
}

/// Intermediate six-valued classification; both a rule input and a field of
/// the final result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimalTag {
    Wolf,
    Cat,
    Rabbit,
    Fox,
    Owl,
    Deer,
}

impl AnimalTag {
    pub const fn name(self) -> &'static str {
        match self {
            AnimalTag::Wolf => "狼",
            AnimalTag::Cat => "猫",
            AnimalTag::Rabbit => "兔",
            AnimalTag::Fox => "狐",
            AnimalTag::Owl => "鸮",
            AnimalTag::Deer => "鹿",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            AnimalTag::Wolf => "领地意识强烈，忠诚但警惕，渴望群体却保持距离",
            AnimalTag::Cat => "优雅独立，若即若离，用冷漠包装深情",
            AnimalTag::Rabbit => "敏感柔软，渴望安全，在爱中寻找庇护所",
            AnimalTag::Fox => "聪明灵活，善于观察，在亲密与疏离间游走",
            AnimalTag::Owl => "深邃理性，洞察人心，在黑暗中寻找真相",
            AnimalTag::Deer => "温柔警觉，容易受惊，在信任与逃离间挣扎",
        }
    }
}

/// Narrative classification assembled from the matched rule's static sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchetypeResult {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub animal: AnimalTag,
    pub profile: &'static str,
    pub blind_spot: &'static str,
    pub soul_match: &'static str,
    pub keywords: &'static [&'static str],
    pub compatibility: u8,
    pub detail_analysis: &'static str,
}
