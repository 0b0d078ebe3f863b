use ping_lynx::{
    lookup_host_v4, PingReport, PingResult, PingSession, ProbeOutcome, StopSignal, PAYLOAD_SIZE,
};
use std::time::Duration;

#[derive(argh::FromArgs)]
/// ping - send ICMP ECHO_REQUEST datagrams to a host
struct Args {
    /// host to ping
    #[argh(positional)]
    host: String,

    /// seconds between pings
    #[argh(option, short = 'i', default = "1.0")]
    interval: f64,

    /// stop after <count> sent ping messages
    #[argh(option, short = 'c', default = "u16::MAX")]
    count: u16,

    /// seconds to wait for each reply
    #[argh(option, short = 'W', default = "1.0")]
    timeout: f64,
}

fn main() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::WARN)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let args: Args = argh::from_env();
    if let Err(error) = run(&args) {
        eprintln!("{error}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> PingResult<()> {
    let address = lookup_host_v4(&args.host)?;
    let destination = if args.host == address.to_string() {
        args.host.clone()
    } else {
        format!("{} ({address})", args.host)
    };

    let mut session = PingSession::open(address, Duration::from_secs_f64(args.timeout))?;
    let stop = StopSignal::new();

    println!("\nPinging {destination} with {PAYLOAD_SIZE} bytes of data:\n");

    for n in 0..args.count {
        match session.probe()? {
            ProbeOutcome::Reply(reply) => println!(
                "{} bytes from {destination}: icmp_seq={} ttl={} time={:.2} ms",
                reply.package_size,
                reply.sequence_number,
                reply.ttl,
                reply.round_trip_time.as_secs_f64() * 1000.0,
            ),
            ProbeOutcome::Timeout { sequence_number } => {
                println!("Request timeout for icmp_seq={sequence_number}");
            }
        }
        if n + 1 < args.count && stop.wait_timeout(Duration::from_secs_f64(args.interval)) {
            break;
        }
    }

    print_report(&destination, &session.report());
    Ok(())
}

fn print_report(destination: &str, report: &PingReport) {
    println!("\nPing statistics for {destination}:");
    println!(
        "\nPackets: Sent = {}, Received = {}, Lost = {} ({:.2}% lost)",
        report.sent, report.received, report.lost, report.loss_pct
    );
    if let Some(round_trips) = report.round_trips {
        println!(
            "Round trip times: Min: {:.2} ms Max: {:.2} ms Avg: {:.2} ms\n",
            round_trips.min.as_secs_f64() * 1000.0,
            round_trips.max.as_secs_f64() * 1000.0,
            round_trips.avg.as_secs_f64() * 1000.0,
        );
    }
}
