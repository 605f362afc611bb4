use clap::Args;
use persona_theatre::assessment::{compatibility_note, AnswerMap, AssessmentEngine};
use persona_theatre::error::AppError;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Option index (0-3) recorded for every question in the scripted run
    #[arg(long, default_value_t = 0)]
    pub(crate) option_index: usize,
    /// Answer only the first N questions to preview a partial snapshot
    #[arg(long)]
    pub(crate) first: Option<usize>,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let engine = AssessmentEngine::standard();
    let take = args.first.unwrap_or(engine.bank().len());
    let answers: AnswerMap = engine
        .bank()
        .questions()
        .iter()
        .take(take)
        .map(|question| (question.id, args.option_index))
        .collect();

    let outcome = engine.evaluate(&answers);

    println!("Absurd Theatre assessment demo");
    println!(
        "Answered {} of {} questions (option index {})",
        outcome.answered,
        engine.bank().len(),
        args.option_index
    );
    if outcome.answered == 0 {
        println!("No entry resolved to a real option; the report below is the empty-run default.");
    }

    println!("\nDimension scores");
    for (dimension, value) in outcome.scores.entries() {
        println!("- {} ({:?}): {}", dimension.label(), dimension, value);
    }

    let archetype = &outcome.archetype;
    println!("\n你的恋爱人格是: {} — {}", archetype.title, archetype.subtitle);
    println!(
        "{}型人格: {}",
        archetype.animal.name(),
        archetype.animal.description()
    );
    println!("\n剧场侧写\n{}", archetype.profile);
    println!("\n人格关键词: {}", archetype.keywords.join(" / "));
    println!("\n关系适配度: {}%", archetype.compatibility);
    println!("{}", compatibility_note(archetype.compatibility));
    println!("\n恋爱盲点\n{}", archetype.blind_spot);
    println!("\n灵魂共振\n{}", archetype.soul_match);
    println!("\n深度分析\n{}", archetype.detail_analysis);

    Ok(())
}
