//! Command-line tester for the status datagram protocol.
//!
//! `trunkstat send` pushes one unit event through a real relay;
//! `trunkstat listen` binds a local port and prints every status datagram
//! that arrives, decoded, as text or JSON.

use std::error::Error;
use std::net::{SocketAddr, UdpSocket};

use chrono::{TimeZone, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use trunkstat_proto::{decode_packet, StatusPacket};
use trunkstat_relay::config::RelayConfig;
use trunkstat_relay::event::{SystemId, UnitEvent};
use trunkstat_relay::metrics::describe_metrics;
use trunkstat_relay::relay::StatusRelay;

// ============================================================================
// CLI Definition
// ============================================================================

/// Send and receive trunked-radio status datagrams.
#[derive(Parser)]
#[command(name = "trunkstat", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a single unit event as a status datagram.
    Send(SendArgs),
    /// Listen for status datagrams and print decoded packets.
    Listen(ListenArgs),
}

#[derive(Args)]
struct SendArgs {
    /// Destination URI (udp://host[:port]).
    #[arg(long, default_value = "udp://127.0.0.1:7767")]
    dest: String,

    /// System site ID (12 bits, decimal or 0x-hex).
    #[arg(long, value_parser = parse_u16_arg)]
    system_id: u16,

    /// WACN (20 bits, decimal or 0x-hex).
    #[arg(long, value_parser = parse_u32_arg)]
    wacn: u32,

    /// Network access code (12 bits, decimal or 0x-hex).
    #[arg(long, value_parser = parse_u32_arg)]
    nac: u32,

    /// Source radio ID.
    #[arg(long, value_parser = parse_u32_arg)]
    radio_id: u32,

    /// Talkgroup ID, for event kinds that carry one.
    #[arg(long, value_parser = parse_u16_arg, default_value = "0")]
    talkgroup: u16,

    /// Event timestamp as UNIX seconds (defaults to now).
    #[arg(long)]
    timestamp: Option<u32>,

    /// Event kind to send.
    #[arg(value_enum)]
    event: EventKind,
}

#[derive(Args)]
struct ListenArgs {
    /// Local address to bind.
    #[arg(long, default_value = "0.0.0.0:7767")]
    bind: String,

    /// Print packets as JSON instead of text.
    #[arg(long)]
    json: bool,
}

/// Event kinds the tester can send.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum EventKind {
    Registration,
    Deregistration,
    AckResponse,
    GroupAffiliation,
    DataGrant,
    AnswerRequest,
    LocationUpdate,
    CallStart,
}

impl EventKind {
    fn into_event(self, radio_id: u32, talkgroup: u16) -> UnitEvent {
        match self {
            EventKind::Registration => UnitEvent::Registration { radio_id },
            EventKind::Deregistration => UnitEvent::Deregistration { radio_id },
            EventKind::AckResponse => UnitEvent::AckResponse { radio_id },
            EventKind::GroupAffiliation => UnitEvent::GroupAffiliation { radio_id, talkgroup },
            EventKind::DataGrant => UnitEvent::DataGrant { radio_id },
            EventKind::AnswerRequest => UnitEvent::AnswerRequest { radio_id, talkgroup },
            EventKind::LocationUpdate => UnitEvent::LocationUpdate { radio_id, talkgroup },
            EventKind::CallStart => UnitEvent::CallStart { radio_id, talkgroup },
        }
    }
}

/// Parse a numeric argument as decimal or `0x`-prefixed hex.
fn parse_u32_arg(s: &str) -> Result<u32, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex_digits) => u32::from_str_radix(hex_digits, 16),
        None => s.parse::<u32>(),
    };
    parsed.map_err(|e| format!("invalid number \"{}\": {}", s, e))
}

fn parse_u16_arg(s: &str) -> Result<u16, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex_digits) => u16::from_str_radix(hex_digits, 16),
        None => s.parse::<u16>(),
    };
    parsed.map_err(|e| format!("invalid number \"{}\": {}", s, e))
}

// ============================================================================
// Entry Point
// ============================================================================

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    describe_metrics();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Send(args) => run_send(args),
        Commands::Listen(args) => run_listen(args),
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}

// ============================================================================
// Send
// ============================================================================

fn run_send(args: SendArgs) -> Result<(), Box<dyn Error>> {
    let mut relay = StatusRelay::new(RelayConfig {
        destination: args.dest,
        enabled: true,
    });
    relay.start()?;

    let system = SystemId {
        system_id: args.system_id,
        wacn: args.wacn,
        nac: args.nac,
    };
    let event = args.event.into_event(args.radio_id, args.talkgroup);

    match args.timestamp {
        Some(ts) => relay.handle_event_at(&system, &event, ts)?,
        None => relay.handle_event(&system, &event)?,
    }

    info!("sent {} for radio {}", event.event_type(), event.radio_id());
    Ok(())
}

// ============================================================================
// Listen
// ============================================================================

fn run_listen(args: ListenArgs) -> Result<(), Box<dyn Error>> {
    let socket = UdpSocket::bind(&args.bind)?;
    info!("listening for status datagrams on {}", socket.local_addr()?);

    // Buffer larger than any valid packet, so an oversized datagram fails
    // length validation instead of being truncated to 20 bytes.
    let mut buf = [0u8; 2048];
    loop {
        let (len, peer) = socket.recv_from(&mut buf)?;
        match decode_packet(&buf[..len]) {
            Ok(packet) => print_packet(&packet, peer, args.json)?,
            Err(e) => warn!(
                "bad datagram from {}: {} [{}]",
                peer,
                e,
                hex::encode(&buf[..len])
            ),
        }
    }
}

fn print_packet(packet: &StatusPacket, peer: SocketAddr, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", serde_json::to_string(packet)?);
        return Ok(());
    }

    let when = Utc
        .timestamp_opt(packet.timestamp as i64, 0)
        .single()
        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| format!("@{}", packet.timestamp));

    println!(
        "[{}] {} system={:03X} wacn={:05X} nac={:03X} tg={} radio={} (from {})",
        when,
        packet.event_type,
        packet.system_id(),
        packet.wacn(),
        packet.nac,
        packet.talkgroup,
        packet.radio_id,
        peer
    );
    Ok(())
}
