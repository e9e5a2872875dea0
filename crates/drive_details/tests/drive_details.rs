use drive_details::export::{read_games, RecordWriter};
use drive_details::schema::{PenaltyStatus, PlayResult, PlayType};
use drive_details::{parse_detail, parse_game, parse_games, PlayRow, COLUMNS};
use std::fs::{self, File};
use std::io::Write;
use tempfile::tempdir;

#[test]
fn touchdown_always_wins() {
	let details = [
		"Frank Gore right end for 12 yards, touchdown",
		"Sam Koch punts 45 yards, returned by Devin Hester for 55 yards, touchdown",
		"Tom Brady pass short left intended for Rob Gronkowski is intercepted by Ed Reed, touchdown",
		"Frank Gore fumbles, recovered by Ray Lewis, touchdown",
		"Penalty on X, Holding, touchdown nullified",
	];

	for detail in details {
		assert_eq!(parse_detail(Some(detail)).result, Some(PlayResult::Touchdown), "Failed for detail: {}", detail);
	}
}

#[test]
fn penalty_disposition_follows_decline() {
	let test_cases = vec![
		("Penalty on Joe Staley, Offensive Holding, 10 yards, declined", PenaltyStatus::Declined),
		("Frank Gore left end for 7 yards. Penalty on Joe Staley, Holding, 10 yards, accepted", PenaltyStatus::Accepted),
		("Penalty on Joe Staley, False Start", PenaltyStatus::Accepted),
	];

	for (detail, expected) in test_cases {
		let details = parse_detail(Some(detail));
		assert!(details.penalty, "Failed for detail: {}", detail);
		assert_eq!(details.penalty_accepted, Some(expected), "Failed for detail: {}", detail);
	}
}

#[test]
fn penalty_on_a_run_keeps_the_run() {
	let details = parse_detail(Some("Frank Gore left end for 7 yards (tackle by Ray Lewis). Penalty on Joe Staley, Holding, 10 yards, accepted"));
	assert_eq!(details.play_type, Some(PlayType::Run));
	assert_eq!(details.result, Some(PlayResult::Gain));
	assert_eq!(details.yards, Some(7));
	assert_eq!(details.tackler.as_deref(), Some("Ray Lewis"));
	assert_eq!(details.penalized_player.as_deref(), Some("Joe Staley"));
}

#[test]
fn overtime_from_header_rows() {
	let rows = vec![
		PlayRow::play("4", "0:03", "Aaron Rodgers kneels for -1 yards"),
		PlayRow::overtime_header("Overtime"),
		PlayRow::play("", "10:00", "John Smith kicks off 65 yards"),
		PlayRow::overtime_header("2nd Overtime"),
		PlayRow::play("", "10:00", "John Smith kicks off 65 yards"),
		PlayRow::overtime_header("3rd Overtime"),
		PlayRow::play("", "10:00", "John Smith kicks off 65 yards"),
	];

	let quarters: Vec<u8> = parse_game(&rows).iter().map(|record| record.quarter.number()).collect();
	assert_eq!(quarters, vec![4, 5, 5, 6, 6, 6, 6]);
}

#[test]
fn overtime_from_ot_cells_and_clock() {
	let rows = vec![
		PlayRow::play("OT", "14:58", "John Smith kicks off 65 yards"),
		PlayRow::play("OT", "3:20", "Frank Gore left end for 3 yards"),
		PlayRow::play("OT", "10:05", "John Smith kicks off 65 yards"),
	];

	let quarters: Vec<u8> = parse_game(&rows).iter().map(|record| record.quarter.number()).collect();
	assert_eq!(quarters, vec![5, 5, 6]);
}

#[test]
fn field_goal_and_extra_point() {
	let details = parse_detail(Some("Justin Tucker 52 yard field goal good"));
	assert_eq!(details.play_type, Some(PlayType::FieldGoal));
	assert_eq!(details.primary_player.as_deref(), Some("Justin Tucker"));
	assert_eq!(details.yards, Some(52));
	assert_eq!(details.field_goal_yards, Some(52));
	assert_eq!(details.result, Some(PlayResult::KickGood));

	let details = parse_detail(Some("Justin Tucker kicks extra point good"));
	assert_eq!(details.play_type, Some(PlayType::ExtraPoint));
	assert_eq!(details.field_goal_yards, None);
	assert_eq!(details.result, Some(PlayResult::KickGood));
}

#[test]
fn sack_and_kneel() {
	let details = parse_detail(Some("Aaron Rodgers sacked by Khalil Mack for -8 yards"));
	assert_eq!(details.play_type, Some(PlayType::Pass));
	assert_eq!(details.sack_by.as_deref(), Some("Khalil Mack"));
	assert_eq!(details.yards, Some(-8));
	assert_eq!(details.result, Some(PlayResult::Sack));

	let details = parse_detail(Some("Aaron Rodgers kneels for -1 yards"));
	assert_eq!(details.play_type, Some(PlayType::Other));
	assert_eq!(details.primary_player.as_deref(), Some("Aaron Rodgers"));
	assert_eq!(details.result, Some(PlayResult::Kneel));
}

#[test]
fn fumble_fills_only_an_empty_result() {
	let details = parse_detail(Some("Aaron Rodgers aborted snap, fumbles"));
	assert_eq!(details.play_type, Some(PlayType::Aborted));
	assert_eq!(details.result, Some(PlayResult::Aborted));

	let details = parse_detail(Some("Frank Gore runs for 0 yards, fumbles"));
	assert_eq!(details.play_type, Some(PlayType::Run));
	assert_eq!(details.result, Some(PlayResult::Fumble));
}

#[test]
fn parse_games_preserves_game_order() {
	let json = r#"[
		{ "game": { "home_team": "Ravens" }, "rows": [{ "quarter": "1", "time_remaining": "15:00", "detail": "Justin Tucker kicks off 65 yards" }] },
		{ "game": { "home_team": "Packers" }, "rows": [{ "quarter": "OT", "time_remaining": "10:00", "detail": "Mason Crosby kicks off 65 yards" }] }
	]"#;

	let dir = tempdir().unwrap();
	let input = dir.path().join("games.json");
	fs::write(&input, json).unwrap();

	let games = read_games(&input).unwrap();
	let parsed = parse_games(&games);
	assert_eq!(parsed.len(), 2);
	assert_eq!(parsed[0][0].details.primary_player.as_deref(), Some("Justin Tucker"));
	assert_eq!(parsed[0][0].quarter.number(), 1);
	assert_eq!(parsed[1][0].details.primary_player.as_deref(), Some("Mason Crosby"));
	assert_eq!(parsed[1][0].quarter.number(), 5);
}

#[test]
fn csv_file_round_trip() {
	let json = r#"{
		"game": { "date": "2024-09-06", "season": 2024, "week": 1, "away_team": "Packers", "home_team": "Eagles", "game_time": "8:15PM" },
		"rows": [
			{ "quarter": "1", "time_remaining": "15:00", "location": "PHI 35", "detail": "Jake Elliott kicks off 65 yards", "exp_points_before": "0.00", "exp_points_after": "0.61" },
			{ "overtime_header": "" },
			{ "quarter": "1", "time_remaining": "14:55", "down": "1", "to_go": "10", "location": "GNB 30", "detail": "Penalty on Jalen Ramsey, Defensive Holding, 5 yards, accepted", "exp_points_before": "0.61", "exp_points_after": "n/a" }
		]
	}"#;

	let dir = tempdir().unwrap();
	let input = dir.path().join("game.json");
	let output = dir.path().join("game.csv");
	File::create(&input).unwrap().write_all(json.as_bytes()).unwrap();

	let games = read_games(&input).unwrap();
	let parsed = parse_games(&games);
	let mut writer = RecordWriter::new(File::create(&output).unwrap(), false).unwrap();
	writer.write_game(&games[0].game, &parsed[0]).unwrap();
	assert_eq!(writer.finish().unwrap(), 2);

	let mut reader = csv::Reader::from_path(&output).unwrap();
	let headers: Vec<String> = reader.headers().unwrap().iter().map(str::to_string).collect();
	assert_eq!(headers, COLUMNS);

	let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
	assert_eq!(rows.len(), 2);

	let column = |name: &str| COLUMNS.iter().position(|c| *c == name).unwrap();
	assert_eq!(&rows[0][column("Home Team")], "Eagles");
	assert_eq!(&rows[0][column("Play_Type")], "Kickoff");
	assert_eq!(&rows[0][column("Result")], "Kick Off");
	assert_eq!(&rows[0][column("EPA")], "0.61");
	assert_eq!(&rows[0][column("Penalty")], "");
	assert_eq!(&rows[1][column("Play_Type")], "Other");
	assert_eq!(&rows[1][column("Penalty")], "Penalty");
	assert_eq!(&rows[1][column("Penalty_Accepted")], "Accepted");
	assert_eq!(&rows[1][column("Penalized_Player")], "Jalen Ramsey");
	assert_eq!(&rows[1][column("Penalty_Yards")], "5");
	assert_eq!(&rows[1][column("Result")], "Penalty Accepted");
	assert_eq!(&rows[1][column("EPA")], "");
}
