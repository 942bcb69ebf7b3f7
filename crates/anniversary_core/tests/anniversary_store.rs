use anniversary_core::db::{open_db, open_db_in_memory};
use anniversary_core::{
    AnniversaryService, AnniversaryTimestamp, FixedClock, RepoError, SettingsRepository,
    SqliteSettingsRepository, ZonedCalendar, ANNIVERSARY_DATE_KEY,
};
use chrono::{DateTime, TimeZone, Timelike, Utc};

fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

fn clock() -> FixedClock {
    FixedClock::new(at(2024, 1, 10))
}

#[test]
fn sqlite_repository_returns_none_for_unknown_key() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSettingsRepository::new(&conn);

    assert_eq!(repo.get_real(ANNIVERSARY_DATE_KEY).unwrap(), None);
}

#[test]
fn sqlite_repository_upserts_single_row_per_key() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSettingsRepository::new(&conn);

    repo.put_real(ANNIVERSARY_DATE_KEY, 1_000.0).unwrap();
    repo.put_real(ANNIVERSARY_DATE_KEY, 2_000.5).unwrap();

    assert_eq!(repo.get_real(ANNIVERSARY_DATE_KEY).unwrap(), Some(2_000.5));
    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM settings;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn sqlite_repository_rejects_non_finite_writes() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSettingsRepository::new(&conn);

    let err = repo.put_real(ANNIVERSARY_DATE_KEY, f64::NAN).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
    assert_eq!(repo.get_real(ANNIVERSARY_DATE_KEY).unwrap(), None);
}

#[test]
fn sqlite_repository_reports_stored_infinity_as_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO settings (key, value) VALUES (?1, 9e999);",
        [ANNIVERSARY_DATE_KEY],
    )
    .unwrap();
    let repo = SqliteSettingsRepository::new(&conn);

    let err = repo.get_real(ANNIVERSARY_DATE_KEY).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn service_defaults_to_now_and_does_not_persist_on_read() {
    let conn = open_db_in_memory().unwrap();
    let service = AnniversaryService::load(
        SqliteSettingsRepository::new(&conn),
        clock(),
        ZonedCalendar::utc(),
    )
    .unwrap();

    assert_eq!(service.get().instant(), at(2024, 1, 10));
    let delta = service.delta();
    assert_eq!(delta.days, 0);
    assert!(!delta.is_in_future);

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM settings;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 0);
}

#[test]
fn set_then_get_roundtrips_far_past_and_far_future_values() {
    let conn = open_db_in_memory().unwrap();
    let mut service = AnniversaryService::load(
        SqliteSettingsRepository::new(&conn),
        clock(),
        ZonedCalendar::utc(),
    )
    .unwrap();

    for instant in [at(-4000, 7, 1), at(1970, 1, 1), at(2025, 3, 15), at(9999, 12, 31)] {
        let value = AnniversaryTimestamp::new(instant);
        service.set(value).unwrap();
        assert_eq!(service.get(), value);
    }
}

#[test]
fn stored_value_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("anniversary.sqlite3");
    let saved = AnniversaryTimestamp::new(Utc.with_ymd_and_hms(2019, 8, 24, 19, 30, 5).unwrap());

    {
        let conn = open_db(&path).unwrap();
        let mut service = AnniversaryService::load(
            SqliteSettingsRepository::new(&conn),
            clock(),
            ZonedCalendar::utc(),
        )
        .unwrap();
        service.set(saved).unwrap();
    }

    let conn = open_db(&path).unwrap();
    let later_clock = FixedClock::new(at(2030, 1, 1));
    let service = AnniversaryService::load(
        SqliteSettingsRepository::new(&conn),
        later_clock,
        ZonedCalendar::utc(),
    )
    .unwrap();
    assert_eq!(service.get(), saved);
}

#[test]
fn reset_stores_current_instant() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("anniversary.sqlite3");

    {
        let conn = open_db(&path).unwrap();
        let mut service = AnniversaryService::load(
            SqliteSettingsRepository::new(&conn),
            clock(),
            ZonedCalendar::utc(),
        )
        .unwrap();
        service.set(AnniversaryTimestamp::new(at(2070, 1, 1))).unwrap();
        assert!(service.developer_console_unlocked());

        let reset_to = service.reset().unwrap();
        assert_eq!(reset_to.instant(), at(2024, 1, 10));
        assert!(!service.developer_console_unlocked());
    }

    let conn = open_db(&path).unwrap();
    let repo = SqliteSettingsRepository::new(&conn);
    let stored = repo.get_real(ANNIVERSARY_DATE_KEY).unwrap().unwrap();
    assert_eq!(stored, at(2024, 1, 10).timestamp() as f64);
}

#[test]
fn corrupt_row_falls_back_to_now() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO settings (key, value) VALUES (?1, 9e999);",
        [ANNIVERSARY_DATE_KEY],
    )
    .unwrap();

    let service = AnniversaryService::load(
        SqliteSettingsRepository::new(&conn),
        clock(),
        ZonedCalendar::utc(),
    )
    .unwrap();
    assert_eq!(service.get().instant(), at(2024, 1, 10));
}

#[test]
fn overview_reflects_stored_anniversary() {
    let conn = open_db_in_memory().unwrap();
    let mut service = AnniversaryService::load(
        SqliteSettingsRepository::new(&conn),
        clock(),
        ZonedCalendar::from_name("Europe/Berlin").unwrap(),
    )
    .unwrap();
    service
        .set(AnniversaryTimestamp::new(at(2024, 1, 9)))
        .unwrap();

    let overview = service.overview();
    assert_eq!(overview.days, 1);
    assert!(!overview.is_in_future);
    assert_eq!(overview.unit_label, "Tag ein Paar");
    assert_eq!(overview.anniversary_long_date, "9. Januar 2024");
    assert!(!overview.developer_console_unlocked);
}

#[test]
fn sub_second_value_reads_back_identically_after_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("anniversary.sqlite3");
    let precise = Utc
        .with_ymd_and_hms(2025, 3, 15, 18, 42, 7)
        .unwrap()
        .with_nanosecond(123_456_789)
        .unwrap();

    let before_restart = {
        let conn = open_db(&path).unwrap();
        let mut service = AnniversaryService::load(
            SqliteSettingsRepository::new(&conn),
            clock(),
            ZonedCalendar::utc(),
        )
        .unwrap();
        service.set(AnniversaryTimestamp::new(precise)).unwrap();
        service.get()
    };

    let conn = open_db(&path).unwrap();
    let service = AnniversaryService::load(
        SqliteSettingsRepository::new(&conn),
        clock(),
        ZonedCalendar::utc(),
    )
    .unwrap();
    assert_eq!(service.get(), before_restart);
    assert_eq!(before_restart.instant().timestamp(), precise.timestamp());
}

#[test]
fn reset_with_nanosecond_clock_returns_what_a_restart_reads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("anniversary.sqlite3");
    let now = at(2024, 1, 10).with_nanosecond(987_654_321).unwrap();

    let reset_to = {
        let conn = open_db(&path).unwrap();
        let mut service = AnniversaryService::load(
            SqliteSettingsRepository::new(&conn),
            FixedClock::new(now),
            ZonedCalendar::utc(),
        )
        .unwrap();
        let reset_to = service.reset().unwrap();
        assert_eq!(service.get(), reset_to);
        reset_to
    };

    let conn = open_db(&path).unwrap();
    let service = AnniversaryService::load(
        SqliteSettingsRepository::new(&conn),
        clock(),
        ZonedCalendar::utc(),
    )
    .unwrap();
    assert_eq!(service.get(), reset_to);
}
