use super::domain::{AnswerOption, Question, QuestionId, QuestionTheme, WeightVector};

/// Highest weight a single option assigns to any dimension in the shipped
/// catalog. Declared rather than inferred so partial answer sets normalize
/// against a stable ceiling.
pub const MAX_OPTION_WEIGHT: u32 = 5;

/// Ordered, read-only catalog of quiz items. Defined once at startup and
/// never mutated afterwards.
#[derive(Debug)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// The shipped 45-item catalog, in quiz order.
    pub fn standard() -> Self {
        Self::new(standard_questions())
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Lookup by identifier; unknown ids are an explicit absence, never a
    /// panic.
    pub fn lookup(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

fn question(
    id: u16,
    theme: QuestionTheme,
    prompt: &'static str,
    options: [(&'static str, [u8; 6]); 4],
) -> Question {
    Question {
        id: QuestionId(id),
        theme,
        prompt,
        options: options
            .into_iter()
            .map(|(text, weights)| AnswerOption {
                text,
                weights: WeightVector::new(weights),
            })
            .collect(),
    }
}

// Option weights are listed as [openness, stability, intimacy, autonomy,
// expression, trust].
fn standard_questions() -> Vec<Question> {
    use QuestionTheme::*;

    vec![
        question(1, Identity, "剧院失火了。你会——", [
            ("把手头的事做完再离开", [2, 4, 3, 5, 2, 3]),
            ("在混乱中找到属于自己的节奏", [5, 3, 2, 4, 5, 3]),
            ("观察出口位置后迅速撤离", [3, 5, 2, 4, 2, 2]),
            ("帮助身边的人一起逃生", [4, 3, 5, 2, 4, 5]),
        ]),
        question(2, Identity, "你在一面只映照内心的镜子前，看到的是——", [
            ("一个比现实中更真实的自己", [4, 4, 3, 4, 3, 4]),
            ("一个你从未见过的陌生人", [5, 2, 2, 3, 2, 2]),
            ("一片空白", [2, 2, 1, 5, 1, 2]),
            ("无数个重叠的影像", [3, 1, 3, 4, 5, 1]),
        ]),
        question(3, Identity, "如果你的人生是一场戏，你在其中扮演的是——", [
            ("不断修改剧本的编剧", [4, 3, 2, 5, 3, 2]),
            ("忠实演绎角色的演员", [3, 4, 4, 2, 4, 4]),
            ("坐在台下的唯一观众", [2, 4, 1, 4, 1, 3]),
            ("打翻了所有道具的闯入者", [5, 1, 3, 5, 5, 1]),
        ]),
        question(4, Identity, "一个没有任何人认识你的城市，你感到——", [
            ("自由", [5, 3, 1, 5, 3, 2]),
            ("恐惧", [2, 2, 5, 1, 3, 4]),
            ("好奇", [5, 4, 3, 4, 4, 3]),
            ("无所谓", [2, 5, 2, 4, 1, 2]),
        ]),
        question(5, Identity, "当别人问起「你是什么样的人」，你通常会——", [
            ("给出一个精心准备的答案", [3, 4, 3, 3, 2, 2]),
            ("视情况给出不同的回答", [4, 3, 2, 4, 3, 2]),
            ("坦诚地说不太清楚", [3, 2, 3, 3, 2, 3]),
            ("反问对方想听什么", [4, 3, 4, 2, 4, 3]),
        ]),
        question(6, Shadow, "你最不愿意承认的事实是——", [
            ("你享受被需要的感觉", [3, 3, 5, 2, 4, 4]),
            ("你有时候根本不在乎别人", [2, 4, 1, 5, 2, 2]),
            ("你害怕真正的亲密", [2, 2, 4, 4, 2, 1]),
            ("你总是在等待被拯救", [2, 2, 5, 1, 3, 3]),
        ]),
        question(7, Shadow, "深夜三点，你醒来后的第一个念头是——", [
            ("明天还有事没做完", [2, 2, 2, 4, 2, 3]),
            ("某个人此刻在做什么", [3, 2, 5, 2, 4, 3]),
            ("这种失眠何时是个头", [2, 1, 3, 3, 2, 2]),
            ("终于有独处的时间了", [3, 4, 1, 5, 2, 3]),
        ]),
        question(8, Shadow, "你曾经做过的、现在想起仍感羞耻的事，你会——", [
            ("反复回想，试图找到合理化的解释", [3, 2, 3, 3, 2, 2]),
            ("强迫自己忘记它", [1, 3, 2, 4, 1, 3]),
            ("承认它是你的一部分", [5, 4, 4, 4, 4, 4]),
            ("把它变成一个可以讲的故事", [5, 3, 4, 3, 5, 4]),
        ]),
        question(9, Shadow, "你嫉妒的人通常是——", [
            ("看起来毫不费力就得到一切的人", [2, 2, 3, 3, 3, 2]),
            ("敢于做你不敢做之事的人", [4, 2, 3, 2, 4, 3]),
            ("被所有人喜爱的人", [3, 2, 5, 2, 4, 3]),
            ("你不嫉妒任何人", [2, 5, 2, 5, 2, 3]),
        ]),
        question(10, Shadow, "当有人说「你变了」，你的反应是——", [
            ("试图解释自己为什么改变", [3, 3, 4, 2, 4, 3]),
            ("感到被误解的愤怒", [2, 2, 3, 4, 4, 2]),
            ("默默接受这个评价", [2, 4, 3, 3, 1, 3]),
            ("反问「变好还是变坏」", [4, 3, 3, 4, 4, 2]),
        ]),
        question(11, Emotion, "对你来说，爱更像是——", [
            ("一场值得投入的冒险", [5, 2, 5, 3, 5, 4]),
            ("一种需要维护的契约", [2, 5, 3, 4, 2, 3]),
            ("一个无法解开的谜题", [4, 2, 3, 3, 2, 2]),
            ("一种本能的归属感", [3, 4, 5, 2, 4, 5]),
        ]),
        question(12, Emotion, "在关系中，你最难以忍受的是——", [
            ("对方的沉默", [4, 2, 5, 2, 5, 3]),
            ("对方的不诚实", [3, 3, 3, 3, 3, 1]),
            ("对方试图改变你", [2, 3, 2, 5, 3, 2]),
            ("对方的过度依赖", [3, 4, 2, 5, 2, 3]),
        ]),
        question(13, Emotion, "分手后的第一周，你通常会——", [
            ("把自己填满，不给悲伤留空隙", [2, 3, 2, 4, 1, 2]),
            ("反复检讨哪里出了问题", [3, 2, 4, 2, 3, 2]),
            ("感到一种奇怪的解脱", [3, 4, 2, 5, 2, 3]),
            ("试图挽回或至少保持联系", [3, 1, 5, 1, 4, 4]),
        ]),
        question(14, Emotion, "你在感情中说过最多的谎是——", [
            ("「我没事」", [2, 3, 3, 4, 1, 3]),
            ("「我不在乎」", [2, 3, 4, 4, 2, 2]),
            ("「我相信你」", [2, 2, 4, 2, 2, 1]),
            ("你几乎不说谎", [4, 4, 4, 3, 4, 4]),
        ]),
        question(15, Emotion, "当对方情绪低落时，你会——", [
            ("立刻询问发生了什么", [4, 3, 5, 2, 4, 4]),
            ("默默陪在旁边", [3, 4, 4, 3, 2, 4]),
            ("给对方独处的空间", [3, 4, 2, 5, 2, 3]),
            ("尝试让对方转移注意力", [4, 3, 4, 3, 4, 3]),
        ]),
        question(16, Desire, "如果可以无条件实现一个愿望，你会选择——", [
            ("永远不再感到孤独", [3, 2, 5, 1, 4, 4]),
            ("拥有看透一切的能力", [5, 4, 2, 5, 2, 1]),
            ("获得不受约束的自由", [5, 3, 1, 5, 3, 2]),
            ("让某个时刻永远定格", [2, 3, 4, 2, 3, 4]),
        ]),
        question(17, Desire, "你理想中的伴侣应该——", [
            ("完全理解你", [3, 3, 5, 2, 3, 5]),
            ("给你足够的空间", [3, 4, 2, 5, 2, 3]),
            ("和你势均力敌", [4, 4, 4, 4, 4, 3]),
            ("带给你惊喜和刺激", [5, 2, 4, 3, 5, 3]),
        ]),
        question(18, Desire, "你更渴望被人记住的方式是——", [
            ("作为一个有趣的人", [5, 3, 4, 3, 5, 4]),
            ("作为一个可靠的人", [2, 5, 4, 3, 2, 5]),
            ("作为一个深刻的人", [4, 3, 3, 4, 3, 3]),
            ("你不太在意被如何记住", [3, 4, 2, 5, 2, 2]),
        ]),
        question(19, Desire, "当欲望与道德冲突时，你通常会——", [
            ("找到一个两全其美的方案", [4, 4, 3, 4, 3, 3]),
            ("压下欲望，遵从道德", [2, 5, 3, 2, 2, 4]),
            ("跟随欲望，承担后果", [5, 2, 3, 5, 5, 2]),
            ("陷入长久的犹豫", [3, 1, 3, 2, 2, 2]),
        ]),
        question(20, Desire, "你对「完美的一天」的定义是——", [
            ("和重要的人在一起，做什么都行", [3, 4, 5, 2, 4, 5]),
            ("独自完成一件有意义的事", [4, 4, 1, 5, 2, 3]),
            ("经历一些意想不到的事", [5, 2, 3, 4, 4, 3]),
            ("什么都不做，彻底放空", [2, 5, 2, 4, 1, 3]),
        ]),
        question(21, Boundary, "有人闯入你的私人空间时，你会——", [
            ("明确告知对方你的边界", [3, 4, 2, 5, 4, 2]),
            ("假装不介意，但内心不适", [2, 2, 4, 2, 1, 3]),
            ("视对方是谁而定", [3, 3, 3, 3, 3, 3]),
            ("你的边界本就模糊", [4, 2, 4, 2, 3, 4]),
        ]),
        question(22, Boundary, "你能接受伴侣翻看你的手机吗？", [
            ("完全可以，没什么不能看的", [4, 4, 5, 2, 4, 5]),
            ("完全不行，这是原则问题", [2, 4, 2, 5, 3, 2]),
            ("可以，但希望对方先告知", [3, 4, 4, 3, 3, 3]),
            ("取决于你们的关系阶段", [4, 3, 3, 3, 3, 3]),
        ]),
        question(23, Boundary, "当朋友的要求让你为难时，你会——", [
            ("答应，但之后感到疲惫", [2, 2, 5, 1, 2, 4]),
            ("找理由婉拒", [2, 4, 3, 4, 2, 2]),
            ("直接说不", [3, 5, 2, 5, 4, 2]),
            ("答应，并不觉得有什么问题", [3, 3, 5, 2, 3, 5]),
        ]),
        question(24, Boundary, "你的秘密通常会——", [
            ("永远烂在肚子里", [1, 5, 1, 5, 1, 2]),
            ("只告诉一个最信任的人", [2, 4, 4, 3, 3, 4]),
            ("说着说着就说出去了", [4, 2, 5, 2, 5, 4]),
            ("变成有趣的故事讲给大家听", [5, 3, 4, 3, 5, 4]),
        ]),
        question(25, Boundary, "在感情中，你认为两个人应该——", [
            ("无话不谈，毫无保留", [4, 3, 5, 1, 5, 5]),
            ("保持适度的神秘感", [3, 4, 3, 4, 3, 3]),
            ("各自保留一些私人领域", [3, 5, 3, 5, 2, 3]),
            ("随着关系深入逐渐开放", [4, 4, 4, 3, 4, 4]),
        ]),
        question(26, Attachment, "在关系里，你更怕的是——", [
            ("被抛弃", [2, 1, 5, 1, 3, 2]),
            ("被束缚", [4, 3, 2, 5, 3, 2]),
            ("被误解", [3, 2, 4, 3, 4, 2]),
            ("被看穿", [2, 2, 3, 4, 2, 1]),
        ]),
        question(27, Attachment, "伴侣出差一周，你会——", [
            ("频繁联系，分享日常", [3, 3, 5, 2, 5, 4]),
            ("偶尔问候，保持独立", [3, 5, 3, 5, 2, 4]),
            ("期待重逢，但享受独处", [4, 4, 4, 4, 3, 4]),
            ("焦虑不安，担心变故", [2, 1, 5, 1, 3, 1]),
        ]),
        question(28, Attachment, "你更容易被什么吸引——", [
            ("稳定可靠，让你安心的人", [2, 5, 4, 2, 2, 5]),
            ("神秘莫测，让你好奇的人", [5, 2, 3, 3, 3, 2]),
            ("热情主动，让你感到被需要的人", [3, 3, 5, 2, 4, 4]),
            ("独立自主，让你有空间的人", [4, 4, 2, 5, 2, 3]),
        ]),
        question(29, Attachment, "吵架之后，你通常会——", [
            ("主动和解，害怕关系破裂", [3, 2, 5, 1, 4, 3]),
            ("冷静分析，等待合适的时机", [3, 5, 3, 4, 2, 3]),
            ("需要独处，消化情绪", [2, 3, 2, 5, 2, 3]),
            ("直接表达，把话说清楚", [4, 3, 4, 4, 5, 3]),
        ]),
        question(30, Attachment, "如果用一个词形容你在感情中的状态，那会是——", [
            ("寻找", [4, 2, 5, 2, 3, 3]),
            ("守护", [2, 5, 4, 3, 3, 5]),
            ("观望", [3, 4, 2, 4, 2, 2]),
            ("游走", [5, 2, 2, 5, 3, 2]),
        ]),
        question(31, Conflict, "发现伴侣说了一个小谎，你会——", [
            ("直接质问，要求解释", [3, 2, 4, 4, 5, 1]),
            ("假装没发现，但心里记着", [2, 3, 3, 3, 1, 2]),
            ("找个合适的时机委婉提起", [3, 4, 4, 3, 3, 3]),
            ("视情况决定是否追究", [4, 4, 3, 4, 3, 3]),
        ]),
        question(32, Conflict, "争吵时，你更常用的武器是——", [
            ("沉默", [2, 3, 2, 4, 1, 2]),
            ("逻辑", [3, 5, 2, 4, 3, 2]),
            ("眼泪", [3, 1, 5, 1, 4, 3]),
            ("翻旧账", [2, 2, 4, 3, 4, 1]),
        ]),
        question(33, Conflict, "当对方的朋友/家人对你有意见时，你希望伴侣——", [
            ("公开站在你这边", [3, 2, 5, 2, 4, 4]),
            ("私下安慰你，公开保持中立", [3, 4, 4, 3, 2, 3]),
            ("帮你分析问题出在哪里", [4, 4, 3, 4, 3, 3]),
            ("让你自己处理", [2, 4, 2, 5, 2, 2]),
        ]),
        question(34, Conflict, "你更难以原谅的是——", [
            ("一次严重的背叛", [2, 3, 4, 3, 3, 1]),
            ("无数次的小失望", [3, 2, 4, 4, 3, 2]),
            ("被公开羞辱", [2, 2, 3, 5, 4, 2]),
            ("你比较容易原谅", [4, 4, 5, 2, 3, 5]),
        ]),
        question(35, Conflict, "关系中出现问题时，你的第一反应是——", [
            ("是我做错了什么吗", [3, 2, 5, 1, 3, 3]),
            ("需要冷静分析原因", [3, 5, 3, 4, 2, 3]),
            ("也许不适合就是不适合", [3, 4, 2, 5, 2, 2]),
            ("先解决情绪再解决问题", [4, 3, 4, 3, 4, 4]),
        ]),
        question(36, Intimacy, "对你来说，最亲密的时刻是——", [
            ("深夜的长谈", [4, 3, 5, 2, 5, 5]),
            ("无言的默契", [3, 4, 4, 3, 2, 5]),
            ("一起经历困难", [4, 4, 5, 3, 4, 5]),
            ("各做各的，但在一起", [3, 5, 3, 5, 2, 4]),
        ]),
        question(37, Intimacy, "你更难以表达的是——", [
            ("「我需要你」", [2, 3, 4, 5, 2, 2]),
            ("「我很受伤」", [2, 2, 3, 4, 1, 2]),
            ("「我爱你」", [2, 4, 4, 3, 2, 3]),
            ("你都能轻松表达", [5, 4, 5, 3, 5, 4]),
        ]),
        question(38, Intimacy, "在关系的稳定期，你会——", [
            ("感到安心和满足", [3, 5, 4, 3, 3, 5]),
            ("有点无聊，想制造点波澜", [5, 2, 3, 4, 4, 3]),
            ("担心这种平静不会持久", [2, 1, 4, 2, 2, 1]),
            ("开始关注自己的其他领域", [4, 4, 2, 5, 2, 4]),
        ]),
        question(39, Intimacy, "你希望伴侣了解你的程度是——", [
            ("完全透明，包括最黑暗的部分", [5, 3, 5, 2, 5, 5]),
            ("了解大部分，保留一点神秘", [3, 4, 4, 4, 3, 4]),
            ("了解你选择展示的那个版本", [2, 4, 2, 5, 2, 2]),
            ("你自己也不完全了解自己", [4, 2, 3, 3, 3, 3]),
        ]),
        question(40, Intimacy, "什么会让你觉得被深深理解——", [
            ("对方记得你说过的小细节", [3, 3, 5, 2, 4, 5]),
            ("对方能读懂你的沉默", [3, 4, 5, 3, 2, 5]),
            ("对方接受你最不堪的一面", [4, 3, 5, 3, 4, 5]),
            ("对方给你做自己的空间", [3, 5, 3, 5, 2, 4]),
        ]),
        question(41, Future, "你对「长久」的理解是——", [
            ("一辈子", [2, 5, 5, 2, 3, 5]),
            ("直到不再合适为止", [4, 3, 3, 5, 3, 3]),
            ("不去想那么远", [3, 3, 2, 4, 2, 2]),
            ("每一天都是新的选择", [5, 2, 3, 5, 3, 3]),
        ]),
        question(42, Future, "如果关系走到尽头，你希望——", [
            ("好聚好散，保持体面", [3, 5, 3, 4, 2, 3]),
            ("彻底切断，不再联系", [2, 4, 2, 5, 2, 1]),
            ("还能做朋友", [4, 3, 4, 3, 4, 4]),
            ("至少弄清楚为什么", [4, 2, 4, 3, 4, 3]),
        ]),
        question(43, Future, "关于婚姻/长期承诺，你的态度是——", [
            ("是爱情的自然归宿", [2, 5, 5, 2, 3, 5]),
            ("只是一种形式，不影响感情本质", [4, 4, 3, 5, 2, 3]),
            ("有点恐惧，担心失去自由", [3, 2, 3, 5, 3, 2]),
            ("遇到对的人再说", [4, 3, 4, 3, 3, 4]),
        ]),
        question(44, Future, "十年后的你，最可能——", [
            ("和某个人一起慢慢变老", [2, 5, 5, 2, 3, 5]),
            ("独自过着自在的生活", [4, 4, 1, 5, 2, 3]),
            ("还在寻找那个对的人", [4, 2, 4, 3, 3, 3]),
            ("无法预测，顺其自然", [5, 3, 3, 4, 3, 3]),
        ]),
        question(45, Future, "如果可以给年轻时的自己一个关于爱情的忠告，你会说——", [
            ("不要害怕受伤", [5, 3, 5, 3, 4, 4]),
            ("先学会爱自己", [3, 4, 3, 5, 3, 3]),
            ("爱情没有你想象的那么重要", [3, 5, 2, 5, 2, 3]),
            ("相信你的直觉", [4, 3, 4, 4, 4, 4]),
        ]),
    ]
}
