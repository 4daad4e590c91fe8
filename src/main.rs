//! Fortuna CLI
//!
//! Usage:
//!   fortuna --fortune --mbti INTJ --element wood     # Daily fortune
//!   fortuna --compat --mbti INTJ --element wood \
//!           --partner-mbti ENFP --partner-element fire
//!   fortuna --match-mbti --mbti INTJ --partner-mbti ENFP
//!   fortuna --luck [--date 2025-03-10]               # Day luck
//!   fortuna --lotto 5 --include 7,14 --exclude 4 --save
//!   fortuna --check --draw 1,2,3,4,5,6 --bonus 7
//!   fortuna --stats [--favorites-only]
//!   fortuna --recommend
//!   fortuna --history
//!   fortuna --serve                                  # HTTP API server

use chrono::{Local, NaiveDate};
use clap::Parser;
use colored::Colorize;

use fortuna::core::{self, run_server, HistoryStore};
use fortuna::types::{CoreError, Element, Mbti};
use fortuna::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "fortuna",
    version = VERSION,
    about = "Fortuna - deterministic daily fortunes, compatibility and lotto numbers",
    long_about = "Fortuna turns an MBTI type and a five-element sign into a daily\n\
                  fortune that is stable for the whole day, scores couple\n\
                  compatibility with rule tables, and generates constrained lotto\n\
                  sets with a saved-set history.\n\n\
                  Modes:\n  \
                  --fortune     Daily fortune (needs --mbti and --element)\n  \
                  --compat      Couple report (needs partner args too)\n  \
                  --match-mbti  Type-only match\n  \
                  --luck        Identity-free day luck\n  \
                  --lotto N     Generate N lotto sets\n  \
                  --check       Check saved sets against a draw\n  \
                  --stats       History statistics\n  \
                  --recommend   Cold-number recommendation\n  \
                  --history     List saved sets\n  \
                  --serve       HTTP API server mode"
)]
struct Args {
    /// Show the daily fortune (requires --mbti and --element)
    #[arg(long)]
    fortune: bool,

    /// Full couple compatibility report
    #[arg(long)]
    compat: bool,

    /// Type-only match (requires --mbti and --partner-mbti)
    #[arg(long)]
    match_mbti: bool,

    /// Identity-free luck reading for the day
    #[arg(long)]
    luck: bool,

    /// Generate this many lotto sets
    #[arg(long)]
    lotto: Option<usize>,

    /// Check saved sets against a winning draw (requires --draw and --bonus)
    #[arg(long)]
    check: bool,

    /// Aggregate statistics over the saved history
    #[arg(long)]
    stats: bool,

    /// Cold-number recommendation from the history
    #[arg(long)]
    recommend: bool,

    /// List saved sets, newest first
    #[arg(long)]
    history: bool,

    /// Run as HTTP API server
    #[arg(long)]
    serve: bool,

    /// Your MBTI type (e.g. INTJ)
    #[arg(long)]
    mbti: Option<String>,

    /// Your element (wood, fire, earth, metal, water)
    #[arg(long)]
    element: Option<String>,

    /// Birth moment as YYYY-MM-DDTHH:MM; derives your element from the
    /// birth chart when --element is absent
    #[arg(long)]
    birth: Option<String>,

    /// Partner MBTI type
    #[arg(long)]
    partner_mbti: Option<String>,

    /// Partner element
    #[arg(long)]
    partner_element: Option<String>,

    /// Date as YYYY-MM-DD (default: today)
    #[arg(long)]
    date: Option<String>,

    /// Numbers to force into every generated set
    #[arg(long, value_delimiter = ',')]
    include: Vec<u8>,

    /// Numbers to keep out of every generated set
    #[arg(long, value_delimiter = ',')]
    exclude: Vec<u8>,

    /// Save generated sets to the history
    #[arg(long)]
    save: bool,

    /// Winning draw numbers, comma separated (with --check)
    #[arg(long, value_delimiter = ',')]
    draw: Vec<u8>,

    /// Bonus number of the draw (with --check)
    #[arg(long)]
    bonus: Option<u8>,

    /// Restrict stats to favorite records
    #[arg(long)]
    favorites_only: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Server address (default: 127.0.0.1:3000)
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,

    /// History file path
    #[arg(long, default_value = "./fortuna_history.json")]
    history_file: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    let result = if args.serve {
        run_serve(&args).await
    } else if args.fortune {
        run_fortune(&args)
    } else if args.compat {
        run_compat(&args)
    } else if args.match_mbti {
        run_match(&args)
    } else if args.luck {
        run_luck(&args)
    } else if let Some(count) = args.lotto {
        run_lotto(&args, count)
    } else if args.check {
        run_check(&args)
    } else if args.stats {
        run_stats(&args)
    } else if args.recommend {
        run_recommend(&args)
    } else if args.history {
        run_history(&args)
    } else {
        // Default to today's luck if no mode specified
        run_luck(&args)
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn parse_mbti(raw: &Option<String>, flag: &str) -> Result<Mbti, CoreError> {
    raw.as_deref()
        .ok_or_else(|| CoreError::UnknownMbti(format!("missing {}", flag)))?
        .parse()
}

fn parse_element(raw: &Option<String>, flag: &str) -> Result<Element, CoreError> {
    raw.as_deref()
        .ok_or_else(|| CoreError::UnknownElement(format!("missing {}", flag)))?
        .parse()
}

/// Resolve the caller's element: explicit flag first, then the lucky
/// (lacking) element of the birth chart.
fn resolve_my_element(args: &Args) -> Result<Element, CoreError> {
    if args.element.is_some() {
        return parse_element(&args.element, "--element");
    }
    if let Some(ref birth) = args.birth {
        let dt = chrono::NaiveDateTime::parse_from_str(birth, "%Y-%m-%dT%H:%M")
            .map_err(|_| CoreError::InvalidDate(birth.clone()))?;
        use chrono::{Datelike, Timelike};
        let chart = core::birth_elements(dt.year(), dt.month(), dt.day(), dt.hour());
        return Ok(chart.lacking);
    }
    Err(CoreError::UnknownElement("missing --element (or --birth)".to_string()))
}

fn resolve_date(raw: &Option<String>) -> Result<NaiveDate, CoreError> {
    match raw {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| CoreError::InvalidDate(s.clone())),
        None => Ok(Local::now().date_naive()),
    }
}

/// Show the daily fortune for one identity
fn run_fortune(args: &Args) -> Result<(), CoreError> {
    let mbti = parse_mbti(&args.mbti, "--mbti")?;
    let element = resolve_my_element(args)?;
    let date = resolve_date(&args.date)?;

    let fortune = core::daily_fortune(mbti, element, date);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&fortune).unwrap());
        return Ok(());
    }
    if args.no_color {
        println!("{}", fortune.to_parseable_string());
        println!("message: {}", fortune.message);
        if let Some(ref m) = fortune.best_match {
            println!("best_match: {} ({}/{}) score={}", m.character_name, m.mbti, m.element, m.score);
        }
        return Ok(());
    }

    println!();
    println!(
        "{} {} {}",
        fortune.character_emoji,
        fortune.character_name.bold(),
        format!("({})", fortune.date).dimmed()
    );
    println!();
    println!("  {}", fortune.message);
    println!();
    println!("  {}  {}", "Lucky time:".cyan(), fortune.lucky_time);
    println!("  {}  {}", "Do:        ".green(), fortune.lucky_action);
    println!("  {}  {}", "Avoid:     ".red(), fortune.avoid_action);
    println!("  {}  {}", "Color:     ".yellow(), fortune.lucky_color);
    println!("  {}  {}", "Number:    ".magenta(), fortune.lucky_number);
    if let Some(ref m) = fortune.best_match {
        println!();
        println!(
            "  {} {} {} {}",
            "Best match today:".bold(),
            m.character_emoji,
            m.character_name,
            format!("({} pts)", m.score).dimmed()
        );
    }
    println!();
    Ok(())
}

/// Full couple compatibility report
fn run_compat(args: &Args) -> Result<(), CoreError> {
    let my_mbti = parse_mbti(&args.mbti, "--mbti")?;
    let my_element = resolve_my_element(args)?;
    let partner_mbti = parse_mbti(&args.partner_mbti, "--partner-mbti")?;
    let partner_element = parse_element(&args.partner_element, "--partner-element")?;

    let report = core::compatibility(my_mbti, my_element, partner_mbti, partner_element);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report).unwrap());
        return Ok(());
    }
    if args.no_color {
        println!(
            "tier={} | total={} | mbti={} | element={}",
            report.tier.label(),
            report.total_score,
            report.mbti_score,
            report.element_score
        );
        return Ok(());
    }

    println!();
    println!(
        "{} {}  x  {} {}",
        report.me.character_emoji,
        report.me.character_name.bold(),
        report.partner.character_emoji,
        report.partner.character_name.bold()
    );
    println!();
    println!(
        "  {} {}  {}",
        report.tier.emoji(),
        report.tier.label().bold(),
        format!("{}/100", report.total_score).cyan()
    );
    println!(
        "  {}",
        format!("type {}  |  element {}", report.mbti_score, report.element_score).dimmed()
    );
    println!();
    println!("  {}", report.tier.blurb());
    println!();
    Ok(())
}

/// Type-only match
fn run_match(args: &Args) -> Result<(), CoreError> {
    let mine = parse_mbti(&args.mbti, "--mbti")?;
    let partner = parse_mbti(&args.partner_mbti, "--partner-mbti")?;

    let result = core::mbti_match(mine, partner);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result).unwrap());
        return Ok(());
    }
    if args.no_color {
        println!("{} x {} | score={} | grade={}", mine, partner, result.score, result.grade.label());
        return Ok(());
    }

    println!();
    println!(
        "  {} x {}  {}  {}",
        mine.to_string().bold(),
        partner.to_string().bold(),
        result.grade.label().green(),
        format!("{}/100", result.score).cyan()
    );
    println!();
    println!("  {}", result.description);
    println!();
    Ok(())
}

/// Identity-free day luck
fn run_luck(args: &Args) -> Result<(), CoreError> {
    let date = resolve_date(&args.date)?;
    let luck = core::day_luck(date);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&luck).unwrap());
        return Ok(());
    }
    if args.no_color {
        println!("{}", luck.to_parseable_string());
        println!("message: {}", luck.message);
        println!("item: {}", luck.lucky_item);
        return Ok(());
    }

    println!();
    println!(
        "  {} {}  {}  {}",
        luck.grade.emoji(),
        luck.grade.label().bold(),
        format!("{}/100", luck.score).cyan(),
        format!("({})", luck.date).dimmed()
    );
    println!();
    println!("  {}", luck.message);
    println!();
    println!("  {}  {}", "Lucky item:  ".yellow(), luck.lucky_item);
    println!("  {}  {}", "Lucky number:".magenta(), luck.lucky_number);
    println!();
    Ok(())
}

/// Color one ball number by its band
fn render_ball(n: u8) -> String {
    let text = format!("{:2}", n);
    match core::ball_color_name(n) {
        "yellow" => text.yellow().to_string(),
        "blue" => text.blue().to_string(),
        "red" => text.red().to_string(),
        "gray" => text.dimmed().to_string(),
        _ => text.green().to_string(),
    }
}

/// Generate lotto sets, optionally saving them
fn run_lotto(args: &Args, count: usize) -> Result<(), CoreError> {
    let sets = core::generate_sets(count, &args.include, &args.exclude)?;

    let saved_ids = if args.save {
        let mut store = HistoryStore::open(&args.history_file)?;
        Some(store.append_batch(&sets)?)
    } else {
        None
    };

    if args.json {
        #[derive(serde::Serialize)]
        struct LottoOutput<'a> {
            sets: &'a [fortuna::types::LottoSet],
            #[serde(skip_serializing_if = "Option::is_none")]
            saved_ids: Option<&'a [String]>,
        }
        let out = LottoOutput { sets: &sets, saved_ids: saved_ids.as_deref() };
        println!("{}", serde_json::to_string_pretty(&out).unwrap());
        return Ok(());
    }

    println!();
    for (i, set) in sets.iter().enumerate() {
        if args.no_color {
            println!("  {:>2}: {}", i + 1, set);
        } else {
            let balls: Vec<String> = set.numbers().iter().map(|&n| render_ball(n)).collect();
            println!("  {:>2}: {}", i + 1, balls.join(" "));
        }
    }
    if saved_ids.is_some() {
        println!();
        println!("  {} {} sets to {}", "saved".green(), sets.len(), args.history_file);
    }
    println!();
    Ok(())
}

/// Check every saved set against a winning draw
fn run_check(args: &Args) -> Result<(), CoreError> {
    use fortuna::types::LottoSet;
    use fortuna::LOTTO_SET_SIZE;

    if args.draw.len() != LOTTO_SET_SIZE {
        return Err(CoreError::InvalidSet(format!(
            "--draw needs exactly {} numbers",
            LOTTO_SET_SIZE
        )));
    }
    let mut numbers = [0u8; LOTTO_SET_SIZE];
    numbers.copy_from_slice(&args.draw);
    numbers.sort_unstable();
    if numbers.windows(2).any(|w| w[0] == w[1]) {
        return Err(CoreError::InvalidSet("duplicate number in --draw".to_string()));
    }
    if numbers.iter().any(|&n| !(1..=45).contains(&n)) {
        return Err(CoreError::InvalidSet("draw numbers must be between 1 and 45".to_string()));
    }
    let bonus = args
        .bonus
        .ok_or_else(|| CoreError::InvalidSet("missing --bonus".to_string()))?;
    if !(1..=45).contains(&bonus) || numbers.contains(&bonus) {
        return Err(CoreError::InvalidSet(
            "bonus must be in 1-45 and outside the draw".to_string(),
        ));
    }
    let draw = LottoSet::from_unsorted(numbers);

    let store = HistoryStore::open(&args.history_file)?;
    let results: Vec<_> = store
        .records()
        .iter()
        .map(|r| (r, fortuna::core::check_winning(&r.numbers, &draw, bonus)))
        .collect();

    if args.json {
        #[derive(serde::Serialize)]
        struct CheckOutput<'a> {
            id: &'a str,
            numbers: fortuna::types::LottoSet,
            result: fortuna::types::WinCheck,
        }
        let out: Vec<CheckOutput> = results
            .iter()
            .map(|(r, w)| CheckOutput { id: &r.id, numbers: r.numbers, result: *w })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out).unwrap());
        return Ok(());
    }

    println!();
    if results.is_empty() {
        println!("  (nothing saved yet)");
        println!();
        return Ok(());
    }
    println!("  draw: {}  bonus: {}", draw, bonus);
    println!();
    for (record, win) in results {
        let rank = match win.rank {
            Some(r) => format!("rank {}", r),
            None => "no win".to_string(),
        };
        let bonus_tag = if win.has_bonus { " +bonus" } else { "" };
        if args.no_color {
            println!("  {} {} hits{} {}", record.numbers, win.match_count, bonus_tag, rank);
        } else {
            let balls: Vec<String> = record
                .numbers
                .numbers()
                .iter()
                .map(|&n| {
                    if draw.contains(n) {
                        format!("{:2}", n).bold().underline().to_string()
                    } else {
                        render_ball(n)
                    }
                })
                .collect();
            let rank_text = if win.rank.is_some() { rank.green().to_string() } else { rank.dimmed().to_string() };
            println!("  {} {} hits{} {}", balls.join(" "), win.match_count, bonus_tag, rank_text);
        }
    }
    println!();
    Ok(())
}

/// Aggregate statistics over the saved history
fn run_stats(args: &Args) -> Result<(), CoreError> {
    let store = HistoryStore::open(&args.history_file)?;
    let stats = core::aggregate(store.records(), args.favorites_only);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats).unwrap());
        return Ok(());
    }

    println!();
    println!("  {} {} sets counted", "History:".bold(), stats.sets_counted);
    if stats.sets_counted == 0 {
        println!("  (nothing saved yet)");
        println!();
        return Ok(());
    }
    println!();
    println!("  {} {:?}", "Hot numbers: ".red(), stats.hot_numbers(6));
    println!("  {} {:?}", "Cold numbers:".blue(), stats.cold_numbers(6));
    println!();
    for bucket in &stats.ranges {
        println!("  {:>5}  {}", bucket.label, "#".repeat(bucket.count as usize));
    }
    println!();
    println!("  odd/even: {}/{}  |  mean sum: {:.1}", stats.odd, stats.even, stats.sum_mean);
    if let Some(pair) = stats.top_pairs(1).first() {
        println!("  most frequent pair: {} & {} ({}x)", pair.a, pair.b, pair.count);
    }
    println!();
    Ok(())
}

/// Cold-number recommendation
fn run_recommend(args: &Args) -> Result<(), CoreError> {
    let store = HistoryStore::open(&args.history_file)?;
    let stats = core::aggregate(store.records(), false);
    let numbers = core::recommend(&stats);

    if args.json {
        #[derive(serde::Serialize)]
        struct RecommendOutput {
            numbers: Vec<u8>,
            sets_counted: usize,
        }
        let out = RecommendOutput { numbers, sets_counted: stats.sets_counted };
        println!("{}", serde_json::to_string_pretty(&out).unwrap());
        return Ok(());
    }

    println!();
    if numbers.is_empty() {
        println!("  Not enough history yet; save at least 3 sets first.");
    } else if args.no_color {
        let parts: Vec<String> = numbers.iter().map(|n| format!("{:2}", n)).collect();
        println!("  {}", parts.join(" "));
    } else {
        let balls: Vec<String> = numbers.iter().map(|&n| render_ball(n)).collect();
        println!("  {} {}", "Recommended:".bold(), balls.join(" "));
    }
    println!();
    Ok(())
}

/// List the saved history, newest first
fn run_history(args: &Args) -> Result<(), CoreError> {
    let store = HistoryStore::open(&args.history_file)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(store.records()).unwrap());
        return Ok(());
    }

    println!();
    if store.records().is_empty() {
        println!("  (nothing saved yet)");
        println!();
        return Ok(());
    }
    for record in store.records() {
        let star = if record.favorite { "*" } else { " " };
        let memo = record.memo.as_deref().unwrap_or("");
        if args.no_color {
            println!(
                "  {}{} {} [{}] {}",
                star,
                record.created_at.format("%Y-%m-%d"),
                record.numbers,
                record.id,
                memo
            );
        } else {
            let balls: Vec<String> =
                record.numbers.numbers().iter().map(|&n| render_ball(n)).collect();
            println!(
                "  {}{} {} {} {}",
                star.yellow(),
                record.created_at.format("%Y-%m-%d").to_string().dimmed(),
                balls.join(" "),
                format!("[{}]", record.id).dimmed(),
                memo.italic()
            );
        }
    }
    println!();
    Ok(())
}

/// Run HTTP API server
async fn run_serve(args: &Args) -> Result<(), CoreError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!();
    println!("🔮 Fortuna API Server v{}", VERSION);
    println!();

    if let Err(e) = run_server(&args.addr, std::path::Path::new(&args.history_file)).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
    Ok(())
}
