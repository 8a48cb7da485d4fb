//! Lanvoyage Headless Validation Harness
//!
//! Validates pure progression logic and data without the mobile app.
//! Runs entirely in-process — no storage, no networking, no grading model.
//!
//! Usage:
//!   cargo run -p lanvoyage-simtest
//!   cargo run -p lanvoyage-simtest -- --verbose

use lanvoyage_logic::awards::{clamp_score, conversation_award, translation_award, AwardConfig};
use lanvoyage_logic::learner::{LearnerProfile, Role, StudyPurpose, StudyStyle, TargetPeriod};
use lanvoyage_logic::progression::{
    current_level_bounds, level_for, level_progress_percent, level_thresholds,
    points_to_next_level, ProgressionConfig,
};
use lanvoyage_logic::records::{self, records_since, stats, StudyMode, StudyRecord};
use lanvoyage_logic::wallet::PointWallet;
use serde::Deserialize;

// ── Practice catalog (sample graded sessions) ───────────────────────────
const CATALOG_JSON: &str = include_str!("../../../data/practice_catalog.json");

#[derive(Debug, Deserialize)]
struct SessionSpec {
    mode: u8,
    score: i64,
    pronunciation_score: i64,
    duration_seconds: u32,
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn check(name: &str, passed: bool, detail: String) -> TestResult {
    TestResult {
        name: name.to_string(),
        passed,
        detail,
    }
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== Lanvoyage Progression Harness ===\n");

    let mut results = Vec::new();

    // 1. Practice catalog validation
    let sessions = match load_catalog(&mut results) {
        Some(s) => s,
        None => {
            report(&results, verbose);
            std::process::exit(1);
        }
    };

    // 2. Threshold table invariants
    results.extend(validate_threshold_table(verbose));

    // 3. Level query sweep
    results.extend(validate_level_queries(verbose));

    // 4. Wallet and awards over the catalog
    results.extend(validate_awards(&sessions, verbose));

    // 5. Study log statistics
    results.extend(validate_records(&sessions, verbose));

    // 6. Learner vocabulary consistency
    results.extend(validate_learner_vocabulary(verbose));

    report(&results, verbose);

    if results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }
}

fn report(results: &[TestResult], verbose: bool) {
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );
}

// ── 1. Practice catalog ─────────────────────────────────────────────────

fn load_catalog(results: &mut Vec<TestResult>) -> Option<Vec<SessionSpec>> {
    println!("--- Practice Catalog ---");

    let sessions: Vec<SessionSpec> = match serde_json::from_str(CATALOG_JSON) {
        Ok(s) => s,
        Err(e) => {
            results.push(check(
                "catalog_parse",
                false,
                format!("JSON parse error: {}", e),
            ));
            return None;
        }
    };

    results.push(check(
        "catalog_not_empty",
        sessions.len() >= 5,
        format!("{} sessions", sessions.len()),
    ));

    let modes_valid = sessions
        .iter()
        .all(|s| StudyMode::from_u8(s.mode).is_some());
    results.push(check(
        "catalog_modes_valid",
        modes_valid,
        "every session maps to a study mode".into(),
    ));

    let scores_in_range = sessions
        .iter()
        .all(|s| (0..=100).contains(&s.score) && (0..=100).contains(&s.pronunciation_score));
    results.push(check(
        "catalog_scores_in_range",
        scores_in_range,
        "all scores within 0..=100".into(),
    ));

    let all_modes_present = StudyMode::ALL
        .iter()
        .all(|m| sessions.iter().any(|s| s.mode == *m as u8));
    results.push(check(
        "catalog_covers_all_modes",
        all_modes_present,
        "translation, quick response, and conversation all present".into(),
    ));

    Some(sessions)
}

// ── 2. Threshold table ──────────────────────────────────────────────────

fn validate_threshold_table(verbose: bool) -> Vec<TestResult> {
    println!("--- Threshold Table ---");
    let mut results = Vec::new();

    let config = ProgressionConfig::default();
    let table = level_thresholds(&config);

    results.push(check(
        "table_length",
        table.len() == config.max_level as usize,
        format!("{} entries", table.len()),
    ));

    let last = table.last().copied().unwrap_or(0);
    results.push(check(
        "table_tops_at_max_points",
        last == config.max_points,
        format!("last entry {}", last),
    ));

    let multiples = table.iter().all(|t| t % 10 == 0 && *t > 0);
    results.push(check(
        "table_positive_multiples_of_ten",
        multiples,
        "every threshold a positive multiple of 10".into(),
    ));

    let monotone = table.windows(2).all(|w| w[1] >= w[0]);
    results.push(check(
        "table_non_decreasing",
        monotone,
        "thresholds never decrease".into(),
    ));

    let stable = table == level_thresholds(&config);
    results.push(check(
        "table_deterministic",
        stable,
        "rebuild produces identical table".into(),
    ));

    if verbose {
        println!("  table: {:?}", table);
    }

    results
}

// ── 3. Level queries ────────────────────────────────────────────────────

fn validate_level_queries(_verbose: bool) -> Vec<TestResult> {
    println!("--- Level Queries ---");
    let mut results = Vec::new();

    let config = ProgressionConfig::default();
    let table = level_thresholds(&config);

    let mut in_range = true;
    let mut monotone = true;
    let mut percent_ok = true;
    let mut bounds_ok = true;
    let mut next_ok = true;
    let mut last_level = 0u32;

    for points in 0..=config.max_points + 1_000 {
        let level = level_for(points, &table);
        in_range &= (1..=config.max_level).contains(&level);
        monotone &= level >= last_level;
        last_level = level;

        let pct = level_progress_percent(points, &table);
        percent_ok &= (0.0..=100.0).contains(&pct);

        let bounds = current_level_bounds(points, &table);
        if points < config.max_points {
            bounds_ok &= bounds.prev <= points && bounds.next > points;
            next_ok &= points_to_next_level(points, &table) == bounds.next - points;
        } else {
            bounds_ok &= bounds.prev == bounds.next;
            next_ok &= points_to_next_level(points, &table) == 0;
        }
    }

    results.push(check(
        "level_in_range",
        in_range,
        "level within 1..=20 for every point total".into(),
    ));
    results.push(check(
        "level_monotone",
        monotone,
        "level never decreases as points grow".into(),
    ));
    results.push(check(
        "percent_in_range",
        percent_ok,
        "progress percent within 0..=100 everywhere".into(),
    ));
    results.push(check(
        "bounds_bracket_points",
        bounds_ok,
        "band bounds bracket the point total until saturation".into(),
    ));
    results.push(check(
        "points_to_next_consistent",
        next_ok,
        "points-to-next agrees with band bounds".into(),
    ));

    results.push(check(
        "endpoints",
        level_for(0, &table) == 1
            && level_for(config.max_points, &table) == config.max_level
            && level_progress_percent(config.max_points, &table) == 100.0,
        "level 1 at zero points, level 20 and 100% at the ceiling".into(),
    ));

    results
}

// ── 4. Wallet & awards ──────────────────────────────────────────────────

fn validate_awards(sessions: &[SessionSpec], verbose: bool) -> Vec<TestResult> {
    println!("--- Wallet & Awards ---");
    let mut results = Vec::new();

    let award_config = AwardConfig::default();
    let mut wallet = PointWallet::default();
    let mut awards = Vec::new();

    for session in sessions {
        let awarded = award_for(session, &award_config);
        wallet.add(awarded);
        awards.push(awarded);
        if verbose {
            println!(
                "  mode {} score {} -> {} points",
                session.mode, session.score, awarded
            );
        }
    }

    let per_session_cap = awards.iter().all(|a| *a <= 15);
    results.push(check(
        "awards_are_small",
        per_session_cap,
        "no single session awards more than 15 points".into(),
    ));

    let total: u32 = awards.iter().sum();
    results.push(check(
        "wallet_accumulates_awards",
        wallet.points() == total,
        format!("wallet {} == sum of awards {}", wallet.points(), total),
    ));

    let table = level_thresholds(&ProgressionConfig::default());
    let level = level_for(wallet.points(), &table);
    results.push(check(
        "catalog_yields_valid_level",
        (1..=20).contains(&level),
        format!("{} points -> level {}", wallet.points(), level),
    ));

    let mut drained = wallet;
    drained.deduct(u32::MAX);
    results.push(check(
        "deduct_floors_at_zero",
        drained.points() == 0 && level_for(0, &table) == 1,
        "overdraft floors the balance at zero, back to level 1".into(),
    ));

    results
}

fn award_for(session: &SessionSpec, config: &AwardConfig) -> u32 {
    match StudyMode::from_u8(session.mode) {
        Some(StudyMode::Translation) => translation_award(
            clamp_score(session.score),
            clamp_score(session.pronunciation_score),
            config,
        ),
        Some(StudyMode::AiConversation) => {
            conversation_award(clamp_score(session.score), session.duration_seconds, config)
        }
        Some(StudyMode::QuickResponse) | None => 0,
    }
}

// ── 5. Study log ────────────────────────────────────────────────────────

fn validate_records(sessions: &[SessionSpec], _verbose: bool) -> Vec<TestResult> {
    println!("--- Study Log ---");
    let mut results = Vec::new();

    const DAY: u64 = 86_400;
    let now = 1_760_000_000u64;
    let award_config = AwardConfig::default();

    // One catalog session per day, oldest first.
    let log: Vec<StudyRecord> = sessions
        .iter()
        .enumerate()
        .map(|(i, s)| {
            StudyRecord::new(
                StudyMode::from_u8(s.mode).unwrap_or(StudyMode::Translation),
                now - (sessions.len() - i) as u64 * DAY,
                clamp_score(s.score),
                s.duration_seconds,
                award_for(s, &award_config),
            )
        })
        .collect();

    let s = stats(&log);
    results.push(check(
        "stats_count",
        s.count == log.len(),
        format!("{} records", s.count),
    ));
    results.push(check(
        "stats_average_score_in_range",
        s.average_score > 0.0 && s.average_score <= 100.0,
        format!("average score {:.1}", s.average_score),
    ));

    let recent = records_since(&log, now, 3);
    let sorted_ok = recent.windows(2).all(|w| w[0].created_at >= w[1].created_at);
    results.push(check(
        "recent_window_sorted",
        recent.len() == 3 && sorted_ok,
        format!("{} records in the last 3 days, newest first", recent.len()),
    ));

    let translations = records::records_by_mode(&log, StudyMode::Translation, None);
    let expected = sessions.iter().filter(|s| s.mode == 1).count();
    results.push(check(
        "mode_filter_matches_catalog",
        translations.len() == expected,
        format!("{} translation records", translations.len()),
    ));

    let recent_stats = stats(&recent);
    results.push(check(
        "windowed_stats_subset",
        recent_stats.total_points <= s.total_points
            && recent_stats.total_seconds <= s.total_seconds,
        "windowed totals never exceed full-log totals".into(),
    ));

    results
}

// ── 6. Learner vocabulary ───────────────────────────────────────────────

fn validate_learner_vocabulary(verbose: bool) -> Vec<TestResult> {
    println!("--- Learner Vocabulary ---");
    let mut results = Vec::new();

    let roles_ok = Role::ALL
        .iter()
        .all(|r| Role::from_u8(*r as u8) == Some(*r) && !r.label().is_empty());
    results.push(check(
        "roles_consistent",
        roles_ok,
        format!("{} roles round-trip through u8", Role::ALL.len()),
    ));

    let purposes_ok = StudyPurpose::ALL
        .iter()
        .all(|p| StudyPurpose::from_u8(*p as u8) == Some(*p) && !p.label().is_empty());
    results.push(check(
        "purposes_consistent",
        purposes_ok,
        format!("{} purposes round-trip through u8", StudyPurpose::ALL.len()),
    ));

    let styles_ok = StudyStyle::ALL
        .iter()
        .all(|s| StudyStyle::from_u8(*s as u8) == Some(*s) && !s.label().is_empty());
    results.push(check(
        "styles_consistent",
        styles_ok,
        format!("{} styles round-trip through u8", StudyStyle::ALL.len()),
    ));

    let mut periods_increase = true;
    let mut last_days = 0;
    for period in TargetPeriod::ALL {
        if period.days() <= last_days {
            periods_increase = false;
        }
        last_days = period.days();
        if verbose {
            println!("  period {:?}: {} days", period, period.days());
        }
    }
    results.push(check(
        "periods_increase",
        periods_increase,
        "target periods strictly lengthen".into(),
    ));

    let profile = LearnerProfile::default();
    results.push(check(
        "default_profile_valid",
        Role::from_u8(profile.role as u8).is_some()
            && profile.target_period.days() >= TargetPeriod::TwoWeeks.days(),
        format!("default profile studies toward {} days", profile.target_period.days()),
    ));

    results
}
