use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, Timelike, Weekday};

pub fn now_lokal() -> NaiveDateTime {
    Local::now().naive_local()
}

fn nama_hari(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Senin",
        Weekday::Tue => "Selasa",
        Weekday::Wed => "Rabu",
        Weekday::Thu => "Kamis",
        Weekday::Fri => "Jumat",
        Weekday::Sat => "Sabtu",
        Weekday::Sun => "Minggu",
    }
}

fn nama_bulan(month: u32) -> &'static str {
    match month {
        1 => "Januari",
        2 => "Februari",
        3 => "Maret",
        4 => "April",
        5 => "Mei",
        6 => "Juni",
        7 => "Juli",
        8 => "Agustus",
        9 => "September",
        10 => "Oktober",
        11 => "November",
        12 => "Desember",
        _ => "",
    }
}

// id-ID banner timestamp: "Senin, 15 Januari 2024 18.30.05"
pub fn format_waktu_lokal(t: NaiveDateTime) -> String {
    format!(
        "{}, {} {} {} {:02}.{:02}.{:02}",
        nama_hari(t.weekday()),
        t.day(),
        nama_bulan(t.month()),
        t.year(),
        t.hour(),
        t.minute(),
        t.second()
    )
}

// id-ID short date: "15/1/2024"
pub fn format_tanggal(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.day(), date.month(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_banner_timestamp_in_indonesian() {
        let t = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(18, 30, 5)
            .unwrap();
        assert_eq!(format_waktu_lokal(t), "Senin, 15 Januari 2024 18.30.05");
    }

    #[test]
    fn formats_sunday_and_december() {
        let t = NaiveDate::from_ymd_opt(2024, 12, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(format_waktu_lokal(t), "Minggu, 1 Desember 2024 00.00.00");
    }

    #[test]
    fn formats_short_date_without_zero_padding() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_tanggal(date), "5/3/2024");
    }
}
