use chrono::{NaiveDate, TimeZone, Utc};
use mmcal::{
    AstroDay, JulianDate, Mahabote, ModifiedJulianDate, MonthType, MoonPhase, MyanmarDate,
    MyanmarMonth, MyanmarYear, Nagahle, Nakhat, Pyathada, WesternCalendar, WesternDate, Weekday,
    YearType,
};

#[test]
fn gregorian_1900_fixed_point() {
    let gregorian = WesternCalendar::gregorian();
    let date = WesternDate::new(1900, 1, 1, gregorian).unwrap();
    assert_eq!(date.to_day_number(gregorian), 2_415_021);

    let back = WesternDate::from_julian(JulianDate::from_day_number(2_415_021), gregorian);
    assert_eq!((back.year, back.month, back.day, back.hour), (1900, 1, 1, 12));
}

#[test]
fn new_year_1900_in_myanmar() {
    let date = MyanmarDate::from_day_number(2_415_021);
    assert_eq!(date.year, 1261);
    assert_eq!(date.year_type, YearType::LittleWatat);
    assert_eq!(date.year_length, 384);
    assert_eq!(date.month, MyanmarMonth::Pyatho);
    assert_eq!(date.day, 2);
    assert_eq!(date.moon_phase, MoonPhase::Waxing);
    assert_eq!(date.weekday, Weekday::Monday);

    let astro = date.astro();
    assert!(astro.thamanyo);
    assert!(astro.nagapor);
    assert_eq!(astro.nagahle, Nagahle::South);
    assert_eq!(astro.mahabote, Mahabote::Puti);
    assert_eq!(astro.nakhat, Nakhat::Elf);
}

#[test]
fn independence_day_1948() {
    let english = WesternCalendar::english();
    let jdn = WesternDate::new(1948, 1, 4, english)
        .unwrap()
        .to_day_number(english);
    assert_eq!(jdn, 2_432_555);

    let date = MyanmarDate::from_day_number(jdn);
    assert_eq!(date.year, 1309);
    assert_eq!(date.year_type, YearType::Common);
    assert_eq!(date.month, MyanmarMonth::Pyatho);
    assert_eq!(date.day, 24);
    assert_eq!(date.moon_phase, MoonPhase::Waning);
    assert_eq!(date.fortnight_day, 9);
    assert_eq!(date.weekday, Weekday::Sunday);
}

#[test]
fn both_sides_of_the_english_transition() {
    let before = MyanmarDate::from_day_number(2_361_221);
    let after = MyanmarDate::from_day_number(2_361_222);
    assert_eq!(before.year, 1114);
    assert_eq!(before.month, MyanmarMonth::Thadingyut);
    assert_eq!((before.day, after.day), (6, 7));
    assert_eq!(before.weekday, Weekday::Wednesday);
    assert_eq!(after.weekday, Weekday::Thursday);

    let english = WesternCalendar::english();
    let w = WesternDate::from_julian(after.to_julian(), english);
    assert_eq!((w.year, w.month, w.day), (1752, 9, 14));
    let w = WesternDate::from_julian(before.to_julian(), english);
    assert_eq!((w.year, w.month, w.day), (1752, 9, 2));

    let astro = after.astro();
    assert!(astro.sabbath_eve);
    assert!(astro.yatyaza);
    assert!(astro.thamanyo);
}

#[test]
fn full_moon_days_of_1385() {
    let english = WesternCalendar::english();
    let kason = mmcal::myanmar_to_day_number(
        1385,
        MyanmarMonth::Kason,
        MonthType::Oo,
        MoonPhase::Full,
        15,
    );
    let w = WesternDate::from_julian(JulianDate::from_day_number(kason), english);
    assert_eq!((w.year, w.month, w.day), (2023, 5, 3));

    let first_waso = mmcal::myanmar_to_day_number(
        1385,
        MyanmarMonth::FirstWaso,
        MonthType::Oo,
        MoonPhase::Full,
        15,
    );
    let w = WesternDate::from_julian(JulianDate::from_day_number(first_waso), english);
    assert_eq!((w.year, w.month, w.day), (2023, 7, 2));

    let second_waso = MyanmarYear::new(1385).full_moon;
    assert_eq!(second_waso - first_waso, 30);
}

#[test]
fn chrono_dates_feed_the_converter() {
    let date = NaiveDate::from_ymd_opt(2024, 4, 17).unwrap();
    let myanmar = MyanmarDate::from(date);
    assert_eq!(myanmar.year, 1386);
    assert_eq!(myanmar.month, MyanmarMonth::Tagu);
    assert_eq!(myanmar.day, 9);
    assert_eq!(myanmar.weekday, Weekday::from(chrono::Datelike::weekday(&date)));

    let astro = myanmar.astro();
    assert!(astro.yatyaza);
    assert!(astro.warameittugyi);
    assert!(astro.warameittunge);
    assert!(astro.yatpote);
    assert!(astro.nagapor);
    assert_eq!(astro.pyathada, Pyathada::None);
    assert_eq!(astro.mahabote, Mahabote::Adipati);
    assert_eq!(astro.nakhat, Nakhat::Orc);
}

#[test]
fn utc_instant_to_myanmar_date() {
    let datetime = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
    let jd = JulianDate::from_utc(datetime);
    assert!((jd.value() - 2_451_545.0).abs() < 1e-9);

    let date = MyanmarDate::from_julian(jd);
    assert_eq!(date.year, 1361);
    assert_eq!(date.month, MyanmarMonth::Nadaw);
    assert_eq!(date.day, 25);
    assert_eq!(date.astro().pyathada, Pyathada::Full);

    assert_eq!(jd.to_utc(), Some(datetime));

    let mjd: ModifiedJulianDate = jd.to_mjd();
    assert_eq!(mjd.value(), 51_544.5);
    assert_eq!(mjd.to_utc(), Some(datetime));
}

#[test]
fn astro_via_date_matches_direct_classification() {
    for jdn in (2_400_000..2_470_000).step_by(97) {
        let date = MyanmarDate::from_day_number(jdn);
        let direct = AstroDay::classify(
            date.month,
            date.month_length,
            date.day,
            date.weekday,
            date.year,
        );
        assert_eq!(date.astro(), direct, "jdn {jdn}");
    }
}

#[cfg(feature = "serde")]
#[test]
fn serde_myanmar_date_round_trips() {
    let date = MyanmarDate::from_day_number(2_460_158);
    let json = serde_json::to_string(&date).unwrap();
    assert!(json.contains("\"year\":1385"));
    assert!(json.contains("\"month\":\"Waso\""));
    let back: MyanmarDate = serde_json::from_str(&json).unwrap();
    assert_eq!(back, date);
}

#[cfg(feature = "serde")]
#[test]
fn serde_julian_date_is_a_bare_number() {
    let jd = JulianDate::from_day_number(2_415_021);
    let json = serde_json::to_string(&jd).unwrap();
    assert_eq!(json, "2415021.0");
    let back: JulianDate = serde_json::from_str(&json).unwrap();
    assert_eq!(back, jd);
}

#[cfg(feature = "serde")]
#[test]
fn serde_western_calendar_fields() {
    let calendar = WesternCalendar::english();
    let json = serde_json::to_string(&calendar).unwrap();
    assert_eq!(json, r#"{"calendar_type":"English","gregorian_start":2361222}"#);
}
