use crate::models::{DreamInsight, DreamRecord, DreamStatistics, InsightCategory, NO_DATA};

/// Evaluate the fixed rule list against a statistics snapshot. Rules fire in
/// a fixed order and only ever append, so the output order is the rule order.
/// Never fails: degenerate statistics simply produce fewer insights.
pub fn generate_insights(stats: &DreamStatistics, dreams: &[DreamRecord]) -> Vec<DreamInsight> {
    let mut insights = Vec::new();

    if dreams.is_empty() {
        insights.push(DreamInsight::new(
            "Welcome to DreamFlow!",
            "Start recording your dreams to unlock personalized insights and patterns.",
            InsightCategory::Suggestion,
            "Record your first dream to begin your journey.",
        ));
        return insights;
    }

    // Consistency
    if stats.current_streak >= 7 {
        insights.push(DreamInsight::new(
            "Consistent Dreamer!",
            format!(
                "You've recorded dreams for {} consecutive days.",
                stats.current_streak
            ),
            InsightCategory::Achievement,
            "Keep up the great work! Consistency improves dream recall.",
        ));
    }
    if stats.dreams_this_week < 3 && dreams.len() >= 5 {
        insights.push(DreamInsight::new(
            "Improve Recall Frequency",
            "You're remembering fewer dreams this week compared to your average.",
            InsightCategory::Suggestion,
            "Try setting a consistent bedtime and keeping a journal by your bed.",
        ));
    }

    // Emotional pattern
    if stats.most_common_emotion != NO_DATA {
        insights.push(DreamInsight::new(
            "Emotional Pattern Detected",
            format!(
                "Your dreams are most frequently {}.",
                stats.most_common_emotion
            ),
            InsightCategory::Pattern,
            emotion_recommendation(&stats.most_common_emotion),
        ));
    }

    // Sleep
    if stats.average_sleep_quality < 6.0 {
        insights.push(DreamInsight::new(
            "Sleep Quality Alert",
            format!(
                "Your average sleep quality is {:.1}/10.",
                stats.average_sleep_quality
            ),
            InsightCategory::Suggestion,
            "Consider improving sleep hygiene: reduce screen time before bed, maintain a cool room temperature.",
        ));
    }
    if stats.average_lucidity > 3.0 {
        insights.push(DreamInsight::new(
            "Lucid Dreaming Potential",
            "You're experiencing good lucidity levels in your dreams.",
            InsightCategory::Achievement,
            "Practice reality checks during the day to enhance lucid dreaming.",
        ));
    }

    // Symbols
    if !stats.top_symbols.is_empty() {
        insights.push(DreamInsight::new(
            "Recurring Symbols",
            format!(
                "Your most common dream symbols: {}",
                stats.top_symbols.join(", ")
            ),
            InsightCategory::Pattern,
            "These symbols may represent important themes in your subconscious mind.",
        ));
    }

    // Achievements
    if stats.total_dreams >= 10 {
        insights.push(DreamInsight::new(
            "Dream Explorer",
            format!("You've recorded {} dreams!", stats.total_dreams),
            InsightCategory::Achievement,
            "You're building a valuable record of your dream journey.",
        ));
    }
    if stats.longest_streak >= 14 {
        insights.push(DreamInsight::new(
            "Dedicated Journaler",
            format!(
                "Your longest recording streak is {} days.",
                stats.longest_streak
            ),
            InsightCategory::Achievement,
            "This consistency is excellent for pattern recognition.",
        ));
    }

    insights
}

fn emotion_recommendation(emotion: &str) -> &'static str {
    match emotion {
        "fear" | "anxiety" => "Consider relaxation techniques before bed to reduce anxiety-driven dreams.",
        "sadness" => "These dreams may be processing emotional healing.",
        "joy" => "Your positive dream emotions may reflect good mental well-being.",
        _ => "Reflect on how these emotional patterns relate to your waking life.",
    }
}
