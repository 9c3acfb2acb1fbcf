use leptos::*;

use crate::api::OvertimeRecord;
use crate::pages::data_lembur::components::status_label::{
    status_lembur_class, status_lembur_label,
};
use crate::pages::data_lembur::utils::display_tanggal;

#[component]
pub fn LemburTable(#[prop(into)] rows: Signal<Vec<OvertimeRecord>>) -> impl IntoView {
    view! {
        <div class="mb-8">
            <table class="min-w-full bg-white border border-gray-300 rounded-lg shadow-md">
                <thead class="bg-green-800 text-white uppercase text-sm leading-normal sticky top-0">
                    <tr>
                        <th class="py-3 pl-3 text-center">"No."</th>
                        <th class="py-3 pl-6 pr-6 text-center">"ID User"</th>
                        <th class="py-3 pl-6 text-center">"Tanggal"</th>
                        <th class="py-3 pl-6 text-center">"Lokasi ID"</th>
                        <th class="py-3 pl-6 text-center">"Deskripsi"</th>
                        <th class="py-3 pl-6 text-center">"Jam Mulai"</th>
                        <th class="py-3 pl-6 text-center">"Jam Selesai"</th>
                        <th class="py-3 pl-6 text-center">"Status"</th>
                    </tr>
                </thead>
                <tbody class="text-gray-600 text-sm font-light">
                    {move || {
                        let rows = rows.get();
                        if rows.is_empty() {
                            view! {
                                <tr>
                                    <td colspan="8" class="py-3 text-center">
                                        "Tidak ada data lembur ditemukan"
                                    </td>
                                </tr>
                            }
                            .into_view()
                        } else {
                            rows.into_iter()
                                .enumerate()
                                .map(|(index, row)| {
                                    view! {
                                        <tr class="border-b border-gray-300 hover:bg-gray-100">
                                            <td class="py-3 pl-6 text-center">{index + 1}</td>
                                            <td class="py-3 pl-6 pr-6 text-center">{row.nama.clone()}</td>
                                            <td class="py-3 pl-6 text-center">{display_tanggal(&row.tanggal)}</td>
                                            <td class="py-3 pl-6 text-center">{row.lokasi}</td>
                                            <td class="py-3 pl-6 text-center">{row.deskripsi.clone()}</td>
                                            <td class="py-3 pl-6 text-center">{row.jam_mulai.clone()}</td>
                                            <td class="py-3 pl-6 text-center">{row.jam_selesai.clone()}</td>
                                            <td class="py-3 pl-6 text-center">
                                                <span class=format!("font-bold {}", status_lembur_class(row.status))>
                                                    {status_lembur_label(row.status)}
                                                </span>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn record(id: i64, status: i64) -> OvertimeRecord {
        OvertimeRecord {
            id,
            id_user: id,
            nama: format!("Karyawan {}", id),
            tanggal: "2024-01-15".into(),
            lokasi: 2,
            deskripsi: "Closing gudang".into(),
            jam_mulai: "18:00".into(),
            jam_selesai: "20:00".into(),
            status,
        }
    }

    #[test]
    fn renders_rows_with_status_labels() {
        let html = render_to_string(move || {
            let rows = create_rw_signal(vec![record(1, 1), record(2, 0)]);
            view! { <LemburTable rows=rows /> }
        });
        assert!(html.contains("Karyawan 1"));
        assert!(html.contains("Disetujui"));
        assert!(html.contains("Belum Disetujui"));
        assert!(html.contains("15/1/2024"));
    }

    #[test]
    fn renders_empty_row_when_no_rows_match() {
        let html = render_to_string(move || {
            let rows = create_rw_signal(Vec::<OvertimeRecord>::new());
            view! { <LemburTable rows=rows /> }
        });
        assert!(html.contains("Tidak ada data lembur ditemukan"));
    }
}
