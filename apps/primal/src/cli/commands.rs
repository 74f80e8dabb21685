//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use super::PrimeSource;
use crate::api::{self, AppState};
use crate::config::PrimalConfig;
use primal_core::{
    Limits, PrimalError, PrimeEngine,
    input::{
        check_analysis_input, check_favored_count, check_mersenne_exponent, check_sieve_limit,
        parse_integer, parse_prime_list,
    },
};
use serde::Serialize;
use std::time::Instant;

/// Enumeration limit used when `demo` runs without `--limit`.
pub const DEFAULT_DEMO_LIMIT: u64 = 1000;

// =============================================================================
// COMMAND CONTEXT
// =============================================================================

/// Engine, limits and output mode shared by every command.
#[derive(Debug)]
pub struct CommandContext {
    pub engine: PrimeEngine,
    pub limits: Limits,
    pub json_mode: bool,
}

impl CommandContext {
    pub fn new(config: &PrimalConfig, json_mode: bool) -> Self {
        Self {
            engine: PrimeEngine::with_cache_capacity(config.engine.cache_capacity),
            limits: config.limits(),
            json_mode,
        }
    }
}

fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}

fn checked_limit(ctx: &CommandContext, raw: &str) -> Result<u64, PrimalError> {
    check_sieve_limit(parse_integer(raw)?, &ctx.limits)
}

/// Resolve `--primes` or `--limit` into a bounded list.
pub fn resolve_source(ctx: &CommandContext, source: &PrimeSource) -> Result<Vec<u64>, PrimalError> {
    let primes = match (&source.primes, &source.limit) {
        (Some(list), _) => parse_prime_list(list)?,
        (None, Some(limit)) => ctx.engine.sieve(checked_limit(ctx, limit)?),
        (None, None) => {
            return Err(PrimalError::InvalidInput(
                "either --primes or --limit is required".to_string(),
            ));
        }
    };
    check_analysis_input(&primes, &ctx.limits)?;
    Ok(primes)
}

// =============================================================================
// SERVER COMMAND
// =============================================================================

/// Start the HTTP server.
pub async fn cmd_server(ctx: CommandContext, host: &str, port: u16) -> Result<(), PrimalError> {
    println!("Primal Server Starting...");
    println!();
    println!("Configuration:");
    println!("  Host:           {}", host);
    println!("  Port:           {}", port);
    println!("  Cache capacity: {}", ctx.engine.cache_stats().capacity);
    println!("  Max sieve:      {}", ctx.limits.max_sieve_limit);
    println!();
    println!("Endpoints:");
    println!("  GET  /health          - Health check");
    println!("  GET  /status          - Cache statistics and limits");
    println!("  GET  /prime/{{n}}       - Primality test");
    println!("  GET  /classify/{{n}}    - Category membership");
    println!("  GET  /sieve           - Primes up to ?limit=");
    println!("  GET  /twins           - Twin pairs up to ?limit=");
    println!("  GET  /mersenne        - Mersenne primes up to ?max_exponent=");
    println!("  GET  /sophie-germain  - Sophie Germain primes up to ?limit=");
    println!("  GET  /palindromic     - Palindromic primes up to ?limit=");
    println!("  GET  /favored         - Favored sequence of ?count=");
    println!("  POST /analyze         - Pattern analysis");
    println!("  POST /report          - Extended report");
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    let addr = format!("{}:{}", host, port);
    api::run_server(&addr, AppState::new(ctx.engine, ctx.limits)).await
}

// =============================================================================
// PRIMALITY COMMANDS
// =============================================================================

/// Test a single integer.
pub fn cmd_check(ctx: &CommandContext, raw: &str) -> Result<(), PrimalError> {
    let n = parse_integer(raw)?;
    let is_prime = ctx.engine.is_prime(n);

    if ctx.json_mode {
        print_json(&serde_json::json!({ "value": n, "is_prime": is_prime }));
        return Ok(());
    }

    if is_prime {
        println!("{} is prime", n);
    } else {
        println!("{} is not prime", n);
    }
    Ok(())
}

/// Show category membership of an integer.
pub fn cmd_classify(ctx: &CommandContext, raw: &str) -> Result<(), PrimalError> {
    let profile = ctx.engine.classify(parse_integer(raw)?);

    if ctx.json_mode {
        print_json(&profile);
        return Ok(());
    }

    println!("Classification of {}", profile.value);
    println!("======================");
    println!("Prime:              {}", profile.is_prime);
    println!("Twin:               {}", profile.twin);
    println!("Palindromic:        {}", profile.palindromic);
    println!("Mersenne:           {}", profile.mersenne);
    println!("Sophie Germain:     {}", profile.sophie_germain);
    println!("Favored:            {}", profile.favored);
    println!("Digit sum prime:    {}", profile.digit_sum_prime);
    println!();

    let categories = profile.categories();
    if categories.is_empty() {
        println!("Categories:         none");
    } else {
        let labels: Vec<&str> = categories.iter().map(|c| c.label()).collect();
        println!("Categories:         {}", labels.join(", "));
    }
    println!("Composite resonance: {:.4}", profile.composite_resonance);
    Ok(())
}

// =============================================================================
// ENUMERATION COMMANDS
// =============================================================================

fn print_primes(ctx: &CommandContext, title: &str, primes: &[u64]) {
    if ctx.json_mode {
        print_json(&serde_json::json!({ "count": primes.len(), "primes": primes }));
        return;
    }
    println!("{}: {}", title, primes.len());
    println!("{:?}", primes);
}

/// List all primes up to a limit.
pub fn cmd_sieve(ctx: &CommandContext, raw: &str) -> Result<(), PrimalError> {
    let limit = checked_limit(ctx, raw)?;
    print_primes(ctx, &format!("Primes up to {}", limit), &ctx.engine.sieve(limit));
    Ok(())
}

/// List twin prime pairs.
pub fn cmd_twins(ctx: &CommandContext, raw: &str) -> Result<(), PrimalError> {
    let limit = checked_limit(ctx, raw)?;
    let pairs = ctx.engine.twin_primes(limit);

    if ctx.json_mode {
        print_json(&serde_json::json!({ "count": pairs.len(), "pairs": pairs }));
        return Ok(());
    }

    println!("Twin prime pairs up to {}: {}", limit, pairs.len());
    for pair in &pairs {
        println!("  ({}, {})", pair.first(), pair.second());
    }
    Ok(())
}

/// List Mersenne primes.
pub fn cmd_mersenne(ctx: &CommandContext, raw: &str) -> Result<(), PrimalError> {
    let exponent = check_mersenne_exponent(parse_integer(raw)?, &ctx.limits)?;
    print_primes(
        ctx,
        &format!("Mersenne primes with exponent <= {}", exponent),
        &ctx.engine.mersenne_primes(exponent),
    );
    Ok(())
}

/// List Sophie Germain primes.
pub fn cmd_sophie(ctx: &CommandContext, raw: &str) -> Result<(), PrimalError> {
    let limit = checked_limit(ctx, raw)?;
    print_primes(
        ctx,
        &format!("Sophie Germain primes up to {}", limit),
        &ctx.engine.sophie_germain_primes(limit),
    );
    Ok(())
}

/// List palindromic primes.
pub fn cmd_palindromic(ctx: &CommandContext, raw: &str) -> Result<(), PrimalError> {
    let limit = checked_limit(ctx, raw)?;
    print_primes(
        ctx,
        &format!("Palindromic primes up to {}", limit),
        &ctx.engine.palindromic_primes(limit),
    );
    Ok(())
}

/// Build the favored sequence.
pub fn cmd_favored(ctx: &CommandContext, raw: &str) -> Result<(), PrimalError> {
    let count = check_favored_count(parse_integer(raw)?, &ctx.limits)?;
    print_primes(
        ctx,
        &format!("Favored sequence of {}", count),
        &ctx.engine.favored_sequence(count),
    );
    Ok(())
}

// =============================================================================
// ANALYSIS COMMANDS
// =============================================================================

/// Pattern analysis of a prime list.
pub fn cmd_analyze(ctx: &CommandContext, source: &PrimeSource) -> Result<(), PrimalError> {
    let primes = resolve_source(ctx, source)?;
    let analysis = ctx.engine.analyze(&primes);

    if ctx.json_mode {
        print_json(&serde_json::json!({ "analysis": analysis }));
        return Ok(());
    }

    let Some(a) = analysis else {
        println!("Empty list: nothing to analyze");
        return Ok(());
    };

    println!("Pattern Analysis");
    println!("================");
    println!("Total:             {}", a.total);
    println!("Range:             {} - {}", a.min, a.max);
    println!("Average gap:       {:.4}", a.avg_gap);
    println!("Gap range:         {} - {}", a.min_gap, a.max_gap);
    println!("Twin pairs <= max: {}", a.twin_count);
    println!("Palindromic:       {}", a.palindromic_count);
    println!("Resonance factor:  {:.4}", a.resonance_factor);
    Ok(())
}

/// Extended resonance report of a prime list.
pub fn cmd_report(ctx: &CommandContext, source: &PrimeSource) -> Result<(), PrimalError> {
    let primes = resolve_source(ctx, source)?;
    let report = ctx.engine.extended_report(&primes);

    if ctx.json_mode {
        print_json(&serde_json::json!({ "analysis": report }));
        return Ok(());
    }

    let Some(r) = report else {
        println!("Empty list: nothing to report");
        return Ok(());
    };

    println!("Extended Report");
    println!("===============");
    println!("Total:                {}", r.analysis.total);
    println!("Range:                {} - {}", r.analysis.min, r.analysis.max);
    println!("Resonance factor:     {:.4}", r.analysis.resonance_factor);
    println!("Modulation coherence: {:.4}", r.modulation_coherence);
    println!("Resonance strength:   {:.4}", r.resonance_strength);
    println!("Sacred density:       {:.4}", r.sacred_density);
    println!("Optimization score:   {:.4}", r.optimization_score);
    println!();
    println!("Constants:");
    println!("  |Z|:          {:.6}", r.constants_snapshot.z_magnitude);
    println!("  L = ln(7919): {:.6}", r.constants_snapshot.lambda);
    println!("  Golden ratio: {:.6}", r.constants_snapshot.golden_ratio);
    println!();
    println!("Phase distribution (last {} primes):", r.constants_snapshot.phase_distribution.len());
    let tail = &primes[primes.len() - r.constants_snapshot.phase_distribution.len()..];
    for (p, phase) in tail.iter().zip(&r.constants_snapshot.phase_distribution) {
        println!("  {:>8}: {:.4} rad", p, phase);
    }
    Ok(())
}

// =============================================================================
// DEMO COMMAND
// =============================================================================

/// Qualitative label for an optimization score.
pub fn score_rating(score: f64) -> &'static str {
    if score > 0.7 {
        "excellent"
    } else if score > 0.5 {
        "good"
    } else if score > 0.3 {
        "functional"
    } else {
        "basic"
    }
}

fn section(title: &str) {
    println!();
    println!("{}", "-".repeat(60));
    println!("{}", title);
    println!("{}", "-".repeat(60));
}

/// Walk through every operation with timings.
pub fn cmd_demo(ctx: &CommandContext, limit: u64) -> Result<(), PrimalError> {
    let limit = check_sieve_limit(limit, &ctx.limits)?;
    let engine = &ctx.engine;
    let c = engine.constants();

    let started = Instant::now();
    let primes = engine.sieve(limit);
    let sieve_time = started.elapsed();

    let started = Instant::now();
    let favored = engine.favored_sequence(20);
    let favored_time = started.elapsed();
    let additions: Vec<u64> = favored.iter().skip(7).copied().collect();

    let twins = engine.twin_primes(limit);
    let mersenne = engine.mersenne_primes(20);
    let sophie = engine.sophie_germain_primes(300);
    let palindromic = engine.palindromic_primes(limit);

    let analysis_input = &primes[..primes.len().min(100)];
    let analysis = engine.analyze(analysis_input);

    let report_input = &primes[..primes.len().min(200)];
    let started = Instant::now();
    let report = engine.extended_report(report_input);
    let report_time = started.elapsed();

    if ctx.json_mode {
        print_json(&serde_json::json!({
            "limit": limit,
            "constants": {
                "z_real": c.z_real(),
                "z_imag": c.z_imag(),
                "z_magnitude": c.z_magnitude(),
                "anchor_prime": c.anchor_prime(),
                "lambda": c.lambda(),
                "modulation_real": c.modulation_real(),
                "modulation_imag": c.modulation_imag(),
                "lambda_z_ratio": c.lambda_z_ratio(),
                "z_lambda_ratio": c.z_lambda_ratio(),
                "golden_ratio": c.golden_ratio(),
                "euler": c.euler(),
                "resonant_gaps": c.resonant_gaps(),
            },
            "prime_count": primes.len(),
            "favored_sequence": favored,
            "twin_count": twins.len(),
            "mersenne": mersenne,
            "sophie_germain": sophie,
            "palindromic": palindromic,
            "analysis": analysis,
            "report": report,
            "rating": report.as_ref().map(|r| score_rating(r.optimization_score)),
            "cache": engine.cache_stats(),
        }));
        return Ok(());
    }

    println!("{}", "=".repeat(80));
    println!("{:^80}", "PRIMAL ENGINE WALKTHROUGH");
    println!("{}", "=".repeat(80));

    section("Constants");
    println!("Z = {} + {}i", c.z_real(), c.z_imag());
    println!("  |Z|           = {:.6}", c.z_magnitude());
    println!("  Anchor prime  = {}", c.anchor_prime());
    println!("  L = ln(7919)  = {:.6}", c.lambda());
    println!("  R / |Z|       = {:.6}", c.modulation_real());
    println!("  I / |Z|       = {:.6}", c.modulation_imag());
    println!("  L / |Z|       = {:.6}", c.lambda_z_ratio());
    println!("  |Z| / L       = {:.6}", c.z_lambda_ratio());
    println!("  Golden ratio  = {:.6}", c.golden_ratio());
    println!("  Euler e       = {:.6}", c.euler());
    println!("Resonant gaps: {:?}", c.resonant_gaps());
    for name in c.gap_family_names() {
        println!("  {:<10} {:?}", name, c.gap_family(name));
    }
    println!("Category weights:");
    for (category, weight) in engine.weights().iter() {
        println!("  {:<16} {:.1}", category.label(), weight);
    }

    section("Prime generation");
    println!(
        "{} primes up to {} in {:.4}s",
        primes.len(),
        limit,
        sieve_time.as_secs_f64()
    );
    println!("First 15: {:?}", &primes[..primes.len().min(15)]);
    println!("Last 10:  {:?}", &primes[primes.len().saturating_sub(10)..]);

    section("Favored sequence");
    println!("Base:     {:?}", engine.favored_sequence(7));
    println!(
        "Extended: {:?} ({:.4}s)",
        favored,
        favored_time.as_secs_f64()
    );
    println!("Added:    {:?}", additions);
    let modulated = c.apply_z_modulation(
        &additions.iter().take(5).map(|&p| p as f64).collect::<Vec<_>>(),
    );
    for (p, z) in additions.iter().zip(&modulated) {
        println!(
            "  {:>5}: phase = {:.4}, z-modulated = {:.4}",
            p,
            c.phase(*p as f64),
            z
        );
    }

    section("Special primes");
    println!("Twin pairs up to {}: {}", limit, twins.len());
    println!("  First 8: {:?}", &twins[..twins.len().min(8)]);
    println!("Mersenne (exponent <= 20): {:?}", mersenne);
    println!("Sophie Germain (<= 300): {}", sophie.len());
    println!("  First 12: {:?}", &sophie[..sophie.len().min(12)]);
    println!("Palindromic up to {}: {:?}", limit, palindromic);

    section("Pattern analysis");
    match &analysis {
        Some(a) => {
            println!("First {} primes:", a.total);
            println!("  Range:            {} - {}", a.min, a.max);
            println!("  Average gap:      {:.2}", a.avg_gap);
            println!("  Max gap:          {}", a.max_gap);
            println!("  Twin pairs:       {}", a.twin_count);
            println!("  Palindromic:      {}", a.palindromic_count);
            println!("  Resonance factor: {:.4}", a.resonance_factor);
        }
        None => println!("No primes up to {}", limit),
    }

    if let Some(r) = &report {
        println!();
        println!(
            "Extended report over {} primes ({:.4}s):",
            r.analysis.total,
            report_time.as_secs_f64()
        );
        println!("  Modulation coherence: {:.4}", r.modulation_coherence);
        println!("  Resonance strength:   {:.4}", r.resonance_strength);
        println!("  Sacred density:       {:.4}", r.sacred_density);
        println!("  Optimization score:   {:.4}", r.optimization_score);
        println!();
        println!("Phase distribution:");
        let tail = &report_input[report_input.len() - r.constants_snapshot.phase_distribution.len()..];
        for (p, phase) in tail.iter().zip(&r.constants_snapshot.phase_distribution) {
            println!("  {:>5}: {:.4} rad", p, phase);
        }

        section("Summary");
        println!(
            "Rating: {} (score {:.4})",
            score_rating(r.optimization_score),
            r.optimization_score
        );
    }

    let stats = engine.cache_stats();
    println!(
        "Oracle cache: {} entries, {} hits, {} misses",
        stats.len, stats.hits, stats.misses
    );
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
