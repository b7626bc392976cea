use chrono::Utc;
use mmcal::{JulianDate, MyanmarDate, MyanmarYear, WesternCalendar, WesternDate};

fn main() {
    let now = JulianDate::from_utc(Utc::now());
    let english = WesternCalendar::english();

    let western = WesternDate::from_julian(now, english);
    let myanmar = MyanmarDate::from_julian(now);
    let year = MyanmarYear::new(myanmar.year);
    let astro = myanmar.astro();

    println!("{now}");
    println!(
        "Western: {}-{:02}-{:02} {:02}:{:02}",
        western.year, western.month, western.day, western.hour, western.minute
    );
    println!(
        "Myanmar: ME {} ({:?}), {:?} {:?}, {:?} {} ({:?})",
        myanmar.year,
        myanmar.year_type,
        myanmar.month_type,
        myanmar.month,
        myanmar.moon_phase,
        myanmar.fortnight_day,
        myanmar.weekday,
    );
    let full_moon = WesternDate::from_julian(year.full_moon_date(), english);
    println!(
        "Waso full moon: {}-{:02}-{:02}",
        full_moon.year, full_moon.month, full_moon.day
    );
    println!(
        "Sabbath: {}, yatyaza: {}, pyathada: {:?}, nagahle: {:?}, mahabote: {:?}, nakhat: {:?}",
        astro.sabbath, astro.yatyaza, astro.pyathada, astro.nagahle, astro.mahabote, astro.nakhat
    );
}
