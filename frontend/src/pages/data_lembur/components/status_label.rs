use crate::api::STATUS_DISETUJUI;

pub fn status_lembur_label(status: i64) -> &'static str {
    if status == STATUS_DISETUJUI {
        "Disetujui"
    } else {
        "Belum Disetujui"
    }
}

pub fn status_lembur_class(status: i64) -> &'static str {
    if status == STATUS_DISETUJUI {
        "text-green-600"
    } else {
        "text-red-600"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approved_status_maps_to_green_label() {
        assert_eq!(status_lembur_label(1), "Disetujui");
        assert_eq!(status_lembur_class(1), "text-green-600");
    }

    #[test]
    fn any_other_status_renders_as_pending() {
        assert_eq!(status_lembur_label(0), "Belum Disetujui");
        assert_eq!(status_lembur_label(2), "Belum Disetujui");
        assert_eq!(status_lembur_class(0), "text-red-600");
    }
}
