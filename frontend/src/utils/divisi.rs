/// Role of the HRD admin: sees employee, absence and overtime totals.
pub const ROLE_HRD: &str = "4";
/// Role of the approving kepala divisi: sees the pending-approval total.
pub const ROLE_KEPALA_DIVISI: &str = "5";

pub fn nama_divisi(role_id: &str) -> &'static str {
    match role_id {
        "1" => "Direktur",
        "2" => "Manajer",
        "3" => "Supervisor",
        "4" => "HRD",
        "5" => "Kepala Divisi",
        _ => "Karyawan",
    }
}
