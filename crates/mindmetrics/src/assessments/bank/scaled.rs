use super::{QuestionBank, ScaledQuestion};

const FREQUENCY_OPTIONS: [&str; 5] = ["Never", "Rarely", "Sometimes", "Often", "Very Often"];
const FREQUENCY_SCORING: [u32; 5] = [0, 1, 2, 3, 4];

const AGREEMENT_OPTIONS: [&str; 4] = [
    "Definitely disagree",
    "Slightly disagree",
    "Slightly agree",
    "Definitely agree",
];
const AGREEMENT_SCORING: [u32; 4] = [0, 1, 2, 3];

const GAD_OPTIONS: [&str; 4] = [
    "Not at all",
    "Several days",
    "More than half the days",
    "Nearly every day",
];
const GAD_SCORING: [u32; 4] = [0, 1, 2, 3];

fn likert(id: u16, prompt: &str, options: &[&str], scoring: &[u32]) -> ScaledQuestion {
    ScaledQuestion {
        id,
        prompt: prompt.to_string(),
        options: options.iter().map(|option| option.to_string()).collect(),
        scoring: scoring.to_vec(),
    }
}

/// 30 frequency-scored items, max 4 points each (bank maximum 120).
pub(super) fn build_adhd() -> QuestionBank {
    let prompts = [
        "How often do you have trouble wrapping up the final details of a project?",
        "How often do you have difficulty getting things in order for a task that requires organization?",
        "How often do you have problems remembering appointments or obligations?",
        "How often do you avoid or delay getting started on a task that requires a lot of thought?",
        "How often do you fidget or squirm when you have to sit down for a long time?",
        "How often do you feel overly active and compelled to do things, as if driven by a motor?",
        "How often do you make careless mistakes on boring or repetitive projects?",
        "How often do you have difficulty keeping your attention on dull or routine work?",
        "How often do you have difficulty concentrating on what people say, even when spoken to directly?",
        "How often do you misplace things at home or at work?",
        "How often are you distracted by activity or noise around you?",
        "How often do you leave your seat in meetings or other situations where you are expected to stay seated?",
        "How often do you feel restless or fidgety?",
        "How often do you have difficulty unwinding and relaxing when you have time to yourself?",
        "How often do you find yourself talking too much in social situations?",
        "How often do you finish the sentences of people you are talking to before they can finish them?",
        "How often do you have difficulty waiting your turn in situations that require it?",
        "How often do you interrupt others when they are busy?",
        "How often do you put off starting large tasks until right before the deadline?",
        "How often do you lose the thread in the middle of a conversation?",
        "How often do you forget why you walked into a room?",
        "How often do you start several projects but finish only a few of them?",
        "How often do you act before thinking through the consequences?",
        "How often do you daydream during meetings or lectures?",
        "How often do you struggle to follow written instructions step by step?",
        "How often do you feel overwhelmed by everyday organization, such as mail or bills?",
        "How often do you rely on last-minute pressure to get work done?",
        "How often do you tap your hands or feet without noticing?",
        "How often do you switch tasks before finishing the one you are on?",
        "How often do you miss details that other people catch easily?",
    ];

    QuestionBank::Scaled(
        prompts
            .iter()
            .enumerate()
            .map(|(index, prompt)| {
                likert(
                    index as u16 + 1,
                    prompt,
                    &FREQUENCY_OPTIONS,
                    &FREQUENCY_SCORING,
                )
            })
            .collect(),
    )
}

/// 10 agreement-scored items, max 3 points each (bank maximum 30).
pub(super) fn build_asd() -> QuestionBank {
    let prompts = [
        "I prefer to do things the same way every time.",
        "I find it hard to work out what someone is thinking or feeling from their face alone.",
        "I find social situations draining rather than energizing.",
        "I can focus intensely on a narrow interest for long stretches of time.",
        "I notice patterns and small details that other people miss.",
        "I find it difficult to know when it is my turn to speak in a conversation.",
        "I tend to take figures of speech literally.",
        "I feel uncomfortable when my routine changes without warning.",
        "In a scene, I find it easier to notice objects than people.",
        "I find small talk harder than talking about facts and topics I know well.",
    ];

    QuestionBank::Scaled(
        prompts
            .iter()
            .enumerate()
            .map(|(index, prompt)| {
                likert(
                    index as u16 + 1,
                    prompt,
                    &AGREEMENT_OPTIONS,
                    &AGREEMENT_SCORING,
                )
            })
            .collect(),
    )
}

/// 7 frequency-scored items over the last two weeks, max 3 points each
/// (bank maximum 21).
pub(super) fn build_anxiety() -> QuestionBank {
    let prompts = [
        "Over the last two weeks, how often have you been feeling nervous, anxious, or on edge?",
        "Over the last two weeks, how often have you been unable to stop or control worrying?",
        "Over the last two weeks, how often have you been worrying too much about different things?",
        "Over the last two weeks, how often have you had trouble relaxing?",
        "Over the last two weeks, how often have you been so restless that it is hard to sit still?",
        "Over the last two weeks, how often have you become easily annoyed or irritable?",
        "Over the last two weeks, how often have you felt afraid, as if something awful might happen?",
    ];

    QuestionBank::Scaled(
        prompts
            .iter()
            .enumerate()
            .map(|(index, prompt)| likert(index as u16 + 1, prompt, &GAD_OPTIONS, &GAD_SCORING))
            .collect(),
    )
}
