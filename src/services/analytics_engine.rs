use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, Duration, Local, NaiveDate};

use crate::error::InvalidInputError;
use crate::models::{dominant_emotion, DreamRecord, DreamStatistics, Emotion};
use crate::services::nlp_engine::NlpEngine;

const TOP_SYMBOL_LIMIT: usize = 5;

/// Aggregate a user's dream history using the local calendar date as "today".
pub fn aggregate(
    nlp: &NlpEngine,
    dreams: &[DreamRecord],
) -> Result<DreamStatistics, InvalidInputError> {
    aggregate_at(nlp, dreams, Local::now().date_naive())
}

/// Aggregate against an explicit "today", so window counts and streaks are
/// reproducible in tests. An empty history yields the sentinel statistics,
/// never an error; a record with out-of-range ratings is the only error path.
pub fn aggregate_at(
    nlp: &NlpEngine,
    dreams: &[DreamRecord],
    today: NaiveDate,
) -> Result<DreamStatistics, InvalidInputError> {
    if dreams.is_empty() {
        return Ok(DreamStatistics::default());
    }
    for dream in dreams {
        dream.validate()?;
    }

    let mut stats = DreamStatistics::default();
    stats.total_dreams = dreams.len() as i32;

    let week_start = today - Duration::days(7);
    let month_start = today.with_day0(0).unwrap_or(today);
    stats.dreams_this_week = dreams
        .iter()
        .filter(|d| d.dream_date >= week_start)
        .count() as i32;
    stats.dreams_this_month = dreams
        .iter()
        .filter(|d| d.dream_date >= month_start)
        .count() as i32;

    stats.average_sleep_quality = dreams
        .iter()
        .map(|d| d.sleep_quality as f64)
        .sum::<f64>()
        / dreams.len() as f64;
    stats.average_lucidity = dreams
        .iter()
        .map(|d| d.lucidity_level as f64)
        .sum::<f64>()
        / dreams.len() as f64;

    // One dominant-emotion vote per dream; one increment per distinct symbol.
    for dream in dreams {
        let scores = nlp.analyze_emotion(&dream.dream_text);
        let dominant = dominant_emotion(&scores);
        *stats.emotion_frequency.entry(dominant).or_insert(0) += 1;

        for label in nlp.extract_symbol_labels(&dream.dream_text) {
            *stats.symbol_frequency.entry(label).or_insert(0) += 1;
        }

        *stats.dreams_per_day.entry(dream.dream_date).or_insert(0) += 1;
    }

    if let Some(emotion) = most_common_emotion(&stats.emotion_frequency) {
        stats.most_common_emotion = emotion.as_str().to_string();
    }
    stats.top_symbols = top_symbols(&stats.symbol_frequency, TOP_SYMBOL_LIMIT);

    let dates: BTreeSet<NaiveDate> = dreams.iter().map(|d| d.dream_date).collect();
    stats.longest_streak = longest_streak(&dates);
    stats.current_streak = current_streak(&dates, today);

    log::debug!(
        "aggregated {} dreams: {} this week, streak {}/{}",
        stats.total_dreams,
        stats.dreams_this_week,
        stats.current_streak,
        stats.longest_streak
    );

    Ok(stats)
}

/// Max by count; ties resolve to the earlier emotion in enum order.
fn most_common_emotion(frequency: &BTreeMap<Emotion, i32>) -> Option<Emotion> {
    let mut best: Option<(Emotion, i32)> = None;
    for emotion in Emotion::ALL {
        if let Some(count) = frequency.get(&emotion) {
            if best.map_or(true, |(_, c)| *count > c) {
                best = Some((emotion, *count));
            }
        }
    }
    best.map(|(emotion, _)| emotion)
}

/// Count descending, label ascending on ties, truncated to `limit`.
fn top_symbols(frequency: &BTreeMap<String, i32>, limit: usize) -> Vec<String> {
    let mut ranked: Vec<(&String, i32)> = frequency.iter().map(|(k, v)| (k, *v)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.into_iter().take(limit).map(|(k, _)| k.clone()).collect()
}

/// Longest run of calendar-consecutive distinct dates; at least 1 when any
/// record exists.
fn longest_streak(dates: &BTreeSet<NaiveDate>) -> i32 {
    let mut longest = 0;
    let mut run = 0;
    let mut prev: Option<NaiveDate> = None;
    for &date in dates {
        run = match prev {
            Some(p) if (date - p).num_days() == 1 => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(date);
    }
    longest
}

/// Consecutive recorded days counting backward from `today`. A missing record
/// for today breaks the streak immediately, even if yesterday has one.
fn current_streak(dates: &BTreeSet<NaiveDate>, today: NaiveDate) -> i32 {
    let mut streak = 0;
    let mut day = today;
    while dates.contains(&day) {
        streak += 1;
        day = day - Duration::days(1);
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NO_DATA;
    use chrono::Datelike;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn dream_on(id: i64, text: &str, day: NaiveDate) -> DreamRecord {
        DreamRecord {
            id,
            user_id: 1,
            dream_text: text.to_string(),
            dream_date: day,
            sleep_quality: 7,
            lucidity_level: 2,
        }
    }

    #[test]
    fn empty_history_yields_sentinel_statistics() {
        let nlp = NlpEngine::new();
        let stats = aggregate_at(&nlp, &[], date(2024, 1, 5)).expect("ok");
        assert_eq!(stats.total_dreams, 0);
        assert_eq!(stats.most_common_emotion, NO_DATA);
        assert!(stats.top_symbols.is_empty());
        assert_eq!(stats.average_sleep_quality, 0.0);
        assert_eq!(stats.longest_streak, 0);
        assert_eq!(stats.current_streak, 0);
    }

    #[test]
    fn malformed_rating_is_rejected() {
        let nlp = NlpEngine::new();
        let mut bad = dream_on(1, "peaceful", date(2024, 1, 1));
        bad.sleep_quality = 11;
        let err = aggregate_at(&nlp, &[bad], date(2024, 1, 5)).expect_err("must fail");
        assert!(err.message.contains("sleep_quality"));
    }

    #[test]
    fn streaks_follow_the_calendar() {
        let nlp = NlpEngine::new();
        let dreams = vec![
            dream_on(1, "calm and peaceful", date(2024, 1, 1)),
            dream_on(2, "flying over clouds", date(2024, 1, 2)),
            dream_on(3, "lost in a maze", date(2024, 1, 3)),
            dream_on(4, "crossing a bridge", date(2024, 1, 5)),
        ];
        let stats = aggregate_at(&nlp, &dreams, date(2024, 1, 5)).expect("ok");
        assert_eq!(stats.longest_streak, 3);
        // The gap on Jan 4 breaks continuity back from today.
        assert_eq!(stats.current_streak, 1);
    }

    #[test]
    fn current_streak_is_zero_without_a_record_today() {
        let nlp = NlpEngine::new();
        let dreams = vec![
            dream_on(1, "a", date(2024, 1, 2)),
            dream_on(2, "b", date(2024, 1, 3)),
            dream_on(3, "c", date(2024, 1, 4)),
        ];
        let stats = aggregate_at(&nlp, &dreams, date(2024, 1, 5)).expect("ok");
        assert_eq!(stats.longest_streak, 3);
        assert_eq!(stats.current_streak, 0);
    }

    #[test]
    fn duplicate_dates_count_once_for_streaks() {
        let nlp = NlpEngine::new();
        let dreams = vec![
            dream_on(1, "a", date(2024, 1, 4)),
            dream_on(2, "b", date(2024, 1, 4)),
            dream_on(3, "c", date(2024, 1, 5)),
        ];
        let stats = aggregate_at(&nlp, &dreams, date(2024, 1, 5)).expect("ok");
        assert_eq!(stats.longest_streak, 2);
        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.dreams_per_day[&date(2024, 1, 4)], 2);
    }

    #[test]
    fn window_counts_use_today_and_first_of_month() {
        let nlp = NlpEngine::new();
        let today = date(2024, 3, 15);
        let dreams = vec![
            dream_on(1, "a", date(2024, 3, 15)),
            dream_on(2, "b", date(2024, 3, 8)),  // exactly seven days back
            dream_on(3, "c", date(2024, 3, 7)),  // outside the week window
            dream_on(4, "d", date(2024, 3, 1)),  // first of month
            dream_on(5, "e", date(2024, 2, 29)), // previous month
        ];
        let stats = aggregate_at(&nlp, &dreams, today).expect("ok");
        assert_eq!(stats.dreams_this_week, 2);
        assert_eq!(stats.dreams_this_month, 4);
        assert_eq!(stats.total_dreams, 5);
        assert_eq!(today.with_day0(0).map(|d| d.day()), Some(1));
    }

    #[test]
    fn histograms_vote_once_per_dream_and_symbol() {
        let nlp = NlpEngine::new();
        let dreams = vec![
            dream_on(1, "I was scared, being chased through the dark", date(2024, 1, 1)),
            dream_on(2, "terrified of the monster, heart pounding", date(2024, 1, 2)),
            dream_on(3, "flying over the ocean, it felt wonderful", date(2024, 1, 3)),
        ];
        let stats = aggregate_at(&nlp, &dreams, date(2024, 1, 3)).expect("ok");
        assert_eq!(stats.emotion_frequency[&Emotion::Fear], 2);
        assert_eq!(stats.emotion_frequency[&Emotion::Joy], 1);
        assert_eq!(stats.most_common_emotion, "fear");
        // Dream 3 contributes one count each for flying and water.
        assert_eq!(stats.symbol_frequency["flying"], 1);
        assert_eq!(stats.symbol_frequency["water"], 1);
        assert!(stats.top_symbols.contains(&"flying".to_string()));
    }

    #[test]
    fn top_symbols_break_count_ties_by_label() {
        let mut frequency = BTreeMap::new();
        for label in ["mirror", "bridge", "water", "fire", "tree", "car"] {
            frequency.insert(label.to_string(), 2);
        }
        frequency.insert("flying".to_string(), 5);
        let top = top_symbols(&frequency, 5);
        assert_eq!(top, vec!["flying", "bridge", "car", "fire", "mirror"]);
    }

    #[test]
    fn most_common_emotion_prefers_enum_order_on_ties() {
        let mut frequency = BTreeMap::new();
        frequency.insert(Emotion::Love, 3);
        frequency.insert(Emotion::Fear, 3);
        assert_eq!(most_common_emotion(&frequency), Some(Emotion::Fear));
    }
}
