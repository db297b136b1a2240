use parkade::Owner;
use parkade::script::{Runner, ScriptError, parse_script};

const ARRIVALS: &str = "\
# two-slot lot, one rush hour
park AP-1234 red
park AP-5678 blue
park AP-9999 green
parked AP-5678
count red
occupancy
";

fn run(capacity: i64, source: &str) -> (Vec<String>, Runner) {
    let lot = Owner::new().create_parking_lot(capacity).unwrap();
    let mut runner = Runner::new(lot);
    let script = parse_script(source).unwrap();
    let output = runner.run(&script);
    (output, runner)
}

fn ticket_id(line: &str) -> u64 {
    line.split_whitespace()
        .nth(1)
        .and_then(|id| id.parse().ok())
        .unwrap()
}

#[test]
fn test_rush_hour_script() {
    let (output, runner) = run(2, ARRIVALS);
    let lot_id = runner.lot().id();

    assert!(output[0].ends_with("slot 0"));
    assert!(output[1].ends_with("slot 1"));
    assert_eq!(output[2], format!("notice: {} is full", lot_id));
    assert_eq!(output[3], "error: Parking lot is full.");
    assert_eq!(output[4], "true");
    assert_eq!(output[5], "1");
    assert_eq!(output[6], "2");
}

#[test]
fn test_unpark_by_printed_ticket() {
    let lot = Owner::new().create_parking_lot(1).unwrap();
    let mut runner = Runner::new(lot);

    let parked = runner.run(&parse_script("park AP-1234 red").unwrap());
    let id = ticket_id(&parked[0]);

    let script = format!("unpark {id}\nunpark {id}\nfull\npark AP-1234 red");
    let output = runner.run(&parse_script(&script).unwrap());

    let lot_id = runner.lot().id();
    assert_eq!(output[0], "unparked AP-1234 (red)");
    assert_eq!(output[1], format!("notice: {} has space available", lot_id));
    assert_eq!(output[2], "error: Car not found in the slot.");
    assert_eq!(output[3], "false");
    assert!(output[4].starts_with("ticket "));
    assert_eq!(output[5], format!("notice: {} is full", lot_id));
}

#[test]
fn test_status_text() {
    let (output, runner) = run(3, "park A1 red\npark - red\npark B2 white\nstatus");

    assert_eq!(
        output.last().unwrap(),
        &format!(
            "{}: 3/3 parked, 0 free (full) [white=1, red=2]",
            runner.lot().id()
        )
    );
}

#[test]
fn test_malformed_script_is_rejected_whole() {
    let err = parse_script("park A1 red\nunpark\nstatus").unwrap_err();
    assert!(matches!(err, ScriptError::WrongArguments { line: 2, .. }));
}
