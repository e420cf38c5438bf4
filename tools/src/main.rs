//! advisor-runner: headless driver for the advisor desk.
//!
//! Usage:
//!   advisor-runner --data-dir ./data
//!   advisor-runner --client 3
//!   advisor-runner --ipc-mode

use advisor_core::{
    client_store::ClientRecord,
    config::AdvisorConfig,
    desk::{new_session_id, AdvisorDesk, ClientDetail},
    recommendation::Recommendation,
    store::AdvisorStore,
    types::ClientId,
};
use anyhow::Result;
use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Instant;

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    GetState,
    SelectClient { id: ClientId },
    // Raw so omitted fields fall back to the desk's loaded config.
    Onboard { form: serde_json::Value },
    Poll,
    ClearSelection,
    Quit,
}

#[derive(serde::Serialize)]
struct UiState<'a> {
    session_id:     &'a str,
    clients:        Vec<ClientRecord>,
    selected:       Option<ClientDetail>,
    generating:     bool,
    recommendation: Option<&'a Recommendation>,
    summary:        Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let client: Option<ClientId> = parse_arg(&args, "--client");
    let data_dir = args
        .windows(2)
        .find(|w| w[0] == "--data-dir")
        .map(|w| w[1].as_str())
        .unwrap_or("./data");

    let config = load_config(data_dir)?;
    let session_id = new_session_id();
    let mut desk = AdvisorDesk::build(session_id, config, AdvisorStore::in_memory()?)?;

    if ipc_mode {
        run_ipc_loop(&mut desk)?;
    } else {
        println!("Advisor Desk — advisor-runner");
        println!("  session:   {}", desk.session_id);
        println!("  data_dir:  {data_dir}");
        println!("  delay:     {} ms", desk.config().recommendation_delay_ms);
        println!();
        print_clients(&desk)?;
        if let Some(id) = client {
            run_selection(&mut desk, id)?;
        }
    }

    Ok(())
}

/// A missing config file is fine; a broken one is not.
fn load_config(data_dir: &str) -> Result<AdvisorConfig> {
    let path = Path::new(data_dir).join(advisor_core::config::CONFIG_FILE);
    if path.exists() {
        AdvisorConfig::load(data_dir)
    } else {
        log::warn!("{} not found, using built-in defaults", path.display());
        Ok(AdvisorConfig::default())
    }
}

fn run_ipc_loop(desk: &mut AdvisorDesk) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                write_error(&mut stdout, &e.to_string())?;
                continue;
            }
        };

        let now = Instant::now();
        let outcome = match cmd {
            IpcCommand::Quit => break,
            IpcCommand::GetState => Ok(()),
            IpcCommand::SelectClient { id } => desk.select_client(id, now).map(|_| ()),
            IpcCommand::Onboard { form } => desk
                .decode_form(form)
                .and_then(|form| desk.onboard(&form, now))
                .map(|_| ()),
            IpcCommand::Poll => desk.poll(now).map(|_| ()),
            IpcCommand::ClearSelection => desk.clear_selection(),
        };

        match outcome {
            Ok(()) => {
                let state = build_ui_state(desk)?;
                writeln!(stdout, "{}", serde_json::to_string(&state)?)?;
                stdout.flush()?;
            }
            // Bad ids and rejected forms are the caller's problem, not fatal.
            Err(e) => write_error(&mut stdout, &e.to_string())?,
        }
    }
    Ok(())
}

fn write_error(stdout: &mut io::Stdout, message: &str) -> Result<()> {
    let err_json = serde_json::json!({ "error": message });
    writeln!(stdout, "{}", err_json)?;
    stdout.flush()?;
    Ok(())
}

fn build_ui_state(desk: &AdvisorDesk) -> Result<UiState<'_>> {
    let recommendation = desk.recommendation();
    Ok(UiState {
        session_id: &desk.session_id,
        clients: desk.clients.list()?,
        selected: desk.selected_detail()?,
        generating: desk.is_generating(),
        recommendation,
        summary: recommendation.map(Recommendation::summary),
    })
}

fn print_clients(desk: &AdvisorDesk) -> Result<()> {
    println!("=== CLIENTS ===");
    for c in desk.clients.list()? {
        println!(
            "  #{:<3} {:<16} age {:>3} | risk {:>4.1} | ${:>10} | goal {:>3}%",
            c.id, c.name, c.age, c.risk_score, c.investment_total, c.goal_progress
        );
    }
    Ok(())
}

fn run_selection(desk: &mut AdvisorDesk, id: ClientId) -> Result<()> {
    let client = desk.select_client(id, Instant::now())?;
    println!();
    println!("Generating recommendation for {} ...", client.name);

    // Wait out the simulated latency, then deliver.
    if let Some(ready_at) = desk.next_ready_at() {
        std::thread::sleep(ready_at.saturating_duration_since(Instant::now()));
    }
    desk.poll(Instant::now())?;

    if let Some(detail) = desk.selected_detail()? {
        println!();
        println!("=== {} ===", detail.client.name);
        println!("  category:             {}", detail.category);
        println!("  volatility tolerance: {}", detail.analysis.volatility_tolerance.label());
        println!("  income needs:         {}", detail.analysis.income_needs.label());
        println!("  loss capacity:        {}", detail.analysis.loss_capacity.label());
        println!(
            "  projected returns:    1y {:.2}% | 5y {:.2}% | 10y {:.2}%",
            detail.projection.one_year,
            detail.projection.five_year_annual,
            detail.projection.ten_year_annual
        );
    }

    if let Some(rec) = desk.recommendation() {
        println!();
        println!("{}", rec.summary());
        println!();
        println!("=== ALLOCATION ===");
        for (label, pct) in rec.allocation.slices() {
            println!("  {label:<13} {pct:>3}%");
        }
        println!("  growth assets:    {}%", rec.allocation.growth_assets());
        println!("  defensive assets: {}%", rec.allocation.defensive_assets());
        println!();
        println!("=== RECOMMENDED INVESTMENTS ===");
        for e in &rec.recommendations {
            println!("  {:<6} {:<40} {:<13} {:>3}%", e.ticker, e.name, e.category, e.allocation);
        }
    }
    Ok(())
}

fn parse_arg<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
}
