// src/interpretation/catalog.rs

//! Indonesian-language text tables used by the classifier and the narrative
//! composer. Nothing in here branches on scores; callers pick a row and
//! substitute `{placeholders}` with [`render`].

/// Fixed guidance for one TPA category at one performance band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryContent {
    pub strengths: &'static str,
    pub weaknesses: &'static str,
    pub recommendations: &'static [&'static str],
    pub difficulty: &'static str,
    pub time_management: &'static str,
}

/// Rows are ordered high, medium, low.
pub type ContentTable = [CategoryContent; 3];

pub static VERBAL_CONTENT: ContentTable = [
    CategoryContent {
        strengths: "Penguasaan kosakata luas serta mampu menangkap makna tersirat dalam bacaan dengan cepat dan tepat.",
        weaknesses: "Tidak ada kelemahan berarti; sesekali kurang teliti pada soal analogi dengan pilihan jawaban yang mirip.",
        recommendations: &[
            "Perkaya bacaan dengan artikel ilmiah dan teks akademik berbahasa Indonesia maupun Inggris.",
            "Latih soal analogi dan silogisme tingkat lanjut untuk menjaga ketajaman.",
            "Manfaatkan kemampuan verbal untuk membantu memahami soal cerita pada tes angka.",
        ],
        difficulty: "Siap mengerjakan soal verbal tingkat sulit.",
        time_management: "Kerjakan soal verbal lebih dulu untuk mengamankan poin dan sisakan waktu bagi bagian lain.",
    },
    CategoryContent {
        strengths: "Memahami sebagian besar soal sinonim, antonim, dan pemahaman bacaan dengan baik.",
        weaknesses: "Masih ragu pada kosakata yang jarang digunakan dan soal analogi berlapis.",
        recommendations: &[
            "Biasakan membaca minimal satu artikel opini setiap hari dan catat kosakata baru.",
            "Latih soal analogi dengan mencari hubungan kata secara eksplisit sebelum melihat pilihan.",
            "Gunakan kamus tematik untuk memperluas kosakata akademik.",
            "Kerjakan paket latihan verbal berwaktu seminggu dua kali.",
        ],
        difficulty: "Fokus pada soal verbal tingkat menengah, lalu naik bertahap ke tingkat sulit.",
        time_management: "Batasi sekitar 45 detik per soal sinonim dan antonim agar waktu cukup untuk bacaan panjang.",
    },
    CategoryContent {
        strengths: "Mampu menjawab soal verbal dasar yang menggunakan kosakata sehari-hari.",
        weaknesses: "Kesulitan memahami bacaan panjang, analogi, serta kosakata akademik.",
        recommendations: &[
            "Mulai dari daftar kosakata dasar TPA dan pelajari 20 kata baru setiap hari.",
            "Latih pemahaman bacaan dengan teks pendek sebelum beralih ke teks panjang.",
            "Pelajari pola hubungan kata (sebab-akibat, bagian-keseluruhan, fungsi) untuk soal analogi.",
            "Diskusikan jawaban latihan dengan pembimbing untuk memahami alasan setiap pilihan.",
        ],
        difficulty: "Mulai dari soal verbal tingkat dasar hingga pola jawaban dikuasai.",
        time_management: "Jangan terpaku pada satu soal; tandai soal sulit dan kembali setelah soal mudah selesai.",
    },
];

pub static NUMERIC_CONTENT: ContentTable = [
    CategoryContent {
        strengths: "Cepat dan akurat dalam berhitung, mengenali pola deret, dan menyelesaikan soal cerita.",
        weaknesses: "Tidak ada kelemahan berarti; terkadang terburu-buru sehingga salah membaca satuan.",
        recommendations: &[
            "Latih soal aritmetika sosial dan statistika dasar tingkat lanjut.",
            "Biasakan memeriksa satuan dan tanda sebelum memilih jawaban.",
            "Kembangkan teknik estimasi untuk mempercepat eliminasi pilihan.",
        ],
        difficulty: "Siap mengerjakan soal numerik tingkat sulit.",
        time_management: "Gunakan sisa waktu bagian angka untuk memeriksa ulang soal cerita.",
    },
    CategoryContent {
        strengths: "Menguasai operasi hitung dasar dan pola deret sederhana.",
        weaknesses: "Masih lambat pada soal cerita bertingkat dan deret dengan dua pola.",
        recommendations: &[
            "Latih deret angka dengan pola ganda dan pola bertingkat.",
            "Hafalkan bentuk pecahan, persen, dan desimal yang sering muncul.",
            "Kerjakan soal cerita dengan menuliskan persamaan terlebih dahulu.",
            "Latih berhitung cepat tanpa kalkulator selama 15 menit setiap hari.",
        ],
        difficulty: "Fokus pada soal numerik tingkat menengah.",
        time_management: "Lewati sementara soal hitungan panjang dan selesaikan deret yang cepat lebih dulu.",
    },
    CategoryContent {
        strengths: "Mampu menyelesaikan operasi hitung dasar secara bertahap.",
        weaknesses: "Kesulitan pada pecahan, persentase, deret, dan soal cerita.",
        recommendations: &[
            "Ulangi konsep pecahan, perbandingan, dan persentase dari dasar.",
            "Latih pola deret sederhana (tambah, kali, selang-seling) sampai lancar.",
            "Pecah soal cerita menjadi langkah kecil dan tulis setiap langkah.",
            "Gunakan latihan berhitung harian untuk membangun kecepatan.",
        ],
        difficulty: "Mulai dari soal numerik tingkat dasar.",
        time_management: "Alokasikan waktu tetap per soal dan jangan menghabiskan lebih dari dua menit pada satu hitungan.",
    },
];

pub static LOGICAL_CONTENT: ContentTable = [
    CategoryContent {
        strengths: "Penalaran deduktif kuat; mampu menarik kesimpulan valid dari premis yang kompleks.",
        weaknesses: "Tidak ada kelemahan berarti; sesekali melewatkan kemungkinan pada soal penalaran analitis panjang.",
        recommendations: &[
            "Latih soal penalaran analitis dengan banyak syarat.",
            "Pelajari logika proposisi formal untuk memperdalam penalaran.",
            "Ikut serta dalam permainan strategi atau olimpiade logika.",
        ],
        difficulty: "Siap mengerjakan soal logika tingkat sulit.",
        time_management: "Buat diagram singkat untuk soal analitis agar tetap cepat tanpa kehilangan ketelitian.",
    },
    CategoryContent {
        strengths: "Mampu mengerjakan silogisme dan penarikan kesimpulan sederhana dengan benar.",
        weaknesses: "Kurang konsisten pada soal analitis dengan banyak syarat dan negasi.",
        recommendations: &[
            "Latih penarikan kesimpulan dari pernyataan berkuantor (semua, sebagian, tidak ada).",
            "Gunakan tabel atau diagram untuk soal penalaran analitis.",
            "Pelajari pola negasi dan kontraposisi.",
            "Kerjakan satu paket soal logika berwaktu setiap minggu.",
        ],
        difficulty: "Fokus pada soal logika tingkat menengah.",
        time_management: "Baca semua syarat sekali secara utuh sebelum mulai menyusun jawaban.",
    },
    CategoryContent {
        strengths: "Mampu mengikuti alur penalaran sederhana dengan bimbingan.",
        weaknesses: "Kesulitan menarik kesimpulan valid dan sering terkecoh pernyataan yang tampak benar.",
        recommendations: &[
            "Pelajari dasar silogisme dan bentuk-bentuk kesimpulan yang sah.",
            "Latih soal logika sederhana dengan membuktikan setiap langkah.",
            "Gunakan teka-teki logika harian untuk membiasakan berpikir runtut.",
            "Bahas kesalahan latihan untuk mengenali pola jebakan.",
        ],
        difficulty: "Mulai dari soal logika tingkat dasar.",
        time_management: "Hindari soal analitis panjang di awal; kerjakan silogisme singkat terlebih dahulu.",
    },
];

pub static SPATIAL_CONTENT: ContentTable = [
    CategoryContent {
        strengths: "Visualisasi ruang sangat baik; cepat mengenali rotasi, pencerminan, dan pola gambar.",
        weaknesses: "Tidak ada kelemahan berarti; sesekali keliru pada gambar dengan detail kecil.",
        recommendations: &[
            "Latih soal jaring-jaring kubus dan rotasi tiga dimensi tingkat lanjut.",
            "Perhatikan detail kecil seperti arah arsiran sebelum menjawab.",
            "Kembangkan minat pada bidang desain, arsitektur, atau teknik.",
        ],
        difficulty: "Siap mengerjakan soal gambar tingkat sulit.",
        time_management: "Percayai intuisi visual pada soal mudah dan simpan waktu untuk soal tiga dimensi.",
    },
    CategoryContent {
        strengths: "Mengenali pola gambar dua dimensi dan seri gambar sederhana dengan baik.",
        weaknesses: "Masih kesulitan pada rotasi tiga dimensi dan jaring-jaring bangun ruang.",
        recommendations: &[
            "Latih rotasi dan pencerminan gambar dengan bantuan kertas atau benda nyata.",
            "Kerjakan soal jaring-jaring kubus secara rutin.",
            "Amati perubahan satu unsur gambar pada setiap langkah seri.",
            "Gunakan aplikasi puzzle spasial sebagai latihan tambahan.",
        ],
        difficulty: "Fokus pada soal gambar tingkat menengah.",
        time_management: "Bandingkan satu unsur gambar pada satu waktu agar tidak terjebak lama pada satu soal.",
    },
    CategoryContent {
        strengths: "Mampu mengenali bentuk dasar dan pola gambar yang sederhana.",
        weaknesses: "Kesulitan membayangkan rotasi, pencerminan, dan perubahan pola bertahap.",
        recommendations: &[
            "Mulai dari soal seri gambar dua dimensi yang sederhana.",
            "Gunakan benda nyata untuk memahami rotasi dan pencerminan.",
            "Latih menggambar ulang bangun ruang dari berbagai sudut pandang.",
            "Kerjakan puzzle gambar secara rutin untuk melatih persepsi visual.",
        ],
        difficulty: "Mulai dari soal gambar tingkat dasar.",
        time_management: "Eliminasi pilihan yang jelas salah lebih dulu sebelum membandingkan detail.",
    },
];

/// Academic-potential statements, from most to least favourable.
pub static ACADEMIC_POTENTIAL: [&str; 4] = [
    "Potensi akademik sangat tinggi; direkomendasikan untuk program studi dengan tuntutan akademik tinggi.",
    "Potensi akademik baik; mampu mengikuti sebagian besar program studi dengan persiapan yang memadai.",
    "Potensi akademik cukup; disarankan memperkuat kemampuan dasar sebelum memilih program studi yang menuntut aspek ini.",
    "Potensi akademik pada aspek ini perlu dikembangkan secara intensif; disarankan bimbingan belajar terstruktur.",
];

/// One tier of the overall narrative, selected by overall percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NarrativeTier {
    pub min_percentage: u8,
    /// Opening sentence; placeholder `{overall}`.
    pub interpretation: &'static str,
    /// Opening recommendation; placeholder `{overall}`.
    pub recommendation: &'static str,
    /// Advice naming `{weakest}`, `{weakest_pct}`, `{strongest}`, `{strongest_pct}`.
    pub focus: &'static str,
    /// Share of study time for the weakest category; the rest goes to the strongest.
    pub weakest_share: u8,
}

/// Ordered from highest tier down; the last row has `min_percentage` 0.
pub static NARRATIVE_TIERS: [NarrativeTier; 5] = [
    NarrativeTier {
        min_percentage: 85,
        interpretation: "Hasil tes menunjukkan kemampuan akademik yang sangat unggul dengan skor keseluruhan {overall}%.",
        recommendation: "Pertahankan performa yang sangat baik ini dan tantang diri dengan soal tingkat lanjut.",
        focus: " Kembangkan keunggulan pada {strongest} ({strongest_pct}%) sambil menjaga konsistensi pada {weakest} ({weakest_pct}%).",
        weakest_share: 50,
    },
    NarrativeTier {
        min_percentage: 75,
        interpretation: "Hasil tes menunjukkan kemampuan akademik yang baik dengan skor keseluruhan {overall}%.",
        recommendation: "Kemampuan Anda sudah baik; tingkatkan konsistensi agar mencapai kategori sangat baik.",
        focus: " Prioritaskan penguatan {weakest} ({weakest_pct}%) dan manfaatkan kekuatan pada {strongest} ({strongest_pct}%).",
        weakest_share: 60,
    },
    NarrativeTier {
        min_percentage: 65,
        interpretation: "Hasil tes menunjukkan kemampuan akademik yang cukup baik dengan skor keseluruhan {overall}%.",
        recommendation: "Kemampuan Anda berada di sekitar rata-rata; latihan terarah akan memberi peningkatan yang berarti.",
        focus: " Fokuskan latihan pada {weakest} ({weakest_pct}%) tanpa mengabaikan {strongest} ({strongest_pct}%).",
        weakest_share: 65,
    },
    NarrativeTier {
        min_percentage: 55,
        interpretation: "Hasil tes menunjukkan kemampuan akademik pada tingkat sedang dengan skor keseluruhan {overall}% dan masih memerlukan penguatan.",
        recommendation: "Diperlukan latihan rutin dan terstruktur untuk meningkatkan hasil tes.",
        focus: " Perbaiki dasar-dasar {weakest} ({weakest_pct}%) terlebih dahulu, lalu jaga kemampuan pada {strongest} ({strongest_pct}%).",
        weakest_share: 70,
    },
    NarrativeTier {
        min_percentage: 0,
        interpretation: "Hasil tes dengan skor keseluruhan {overall}% masih di bawah harapan dan menunjukkan perlunya pengembangan kemampuan akademik secara menyeluruh.",
        recommendation: "Disarankan mengikuti program bimbingan intensif dan mengulang materi dasar seluruh komponen tes.",
        focus: " Mulailah dari {weakest} ({weakest_pct}%) sebagai prioritas utama, sambil mempertahankan {strongest} ({strongest_pct}%).",
        weakest_share: 80,
    },
];

pub const EXCELLENT_FRAGMENT: &str = " Kemampuan sangat menonjol terlihat pada {names}.";
pub const GOOD_FRAGMENT: &str = " Kemampuan yang baik ditunjukkan pada {names}.";
pub const AVERAGE_FRAGMENT: &str = " Kemampuan pada {names} berada pada tingkat rata-rata.";
pub const WEAK_FRAGMENT: &str = " Aspek {names} masih memerlukan perhatian khusus.";

pub const SINGLE_FOCUS_FRAGMENT: &str = " Fokuskan latihan pada {weakest} ({weakest_pct}%).";
pub const ALLOCATION_FRAGMENT: &str = " Alokasikan sekitar {weakest_share}% waktu belajar untuk {weakest} dan {strongest_share}% untuk {strongest}.";
pub const TIME_NOTE_FRAGMENT: &str = " Saat tes, {time_note}";

/// Replaces each `{key}` in `template` with its value. Unknown placeholders
/// are left as-is.
pub fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (key, value) in values {
        out = out.replace(&format!("{{{}}}", key), value);
    }
    out
}

/// Joins names Indonesian-style: "A", "A dan B", "A, B, dan C".
pub fn join_names(names: &[String]) -> String {
    match names {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{} dan {}", first, second),
        [init @ .., last] => format!("{}, dan {}", init.join(", "), last),
    }
}

/// Lower-cases the first character, for embedding a sentence mid-paragraph.
pub fn lowercase_first(sentence: &str) -> String {
    let mut chars = sentence.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_all_occurrences() {
        let out = render("{a} dan {b}, lagi {a}", &[("a", "X"), ("b", "Y")]);
        assert_eq!(out, "X dan Y, lagi X");
    }

    #[test]
    fn test_render_leaves_unknown_placeholders() {
        assert_eq!(render("{missing}", &[("a", "X")]), "{missing}");
    }

    #[test]
    fn test_join_names() {
        let names: Vec<String> = ["Verbal", "Numerik", "Logika"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(join_names(&names[..0]), "");
        assert_eq!(join_names(&names[..1]), "Verbal");
        assert_eq!(join_names(&names[..2]), "Verbal dan Numerik");
        assert_eq!(join_names(&names), "Verbal, Numerik, dan Logika");
    }

    #[test]
    fn test_tables_are_well_formed() {
        for table in [&VERBAL_CONTENT, &NUMERIC_CONTENT, &LOGICAL_CONTENT, &SPATIAL_CONTENT] {
            for row in table.iter() {
                assert!(!row.recommendations.is_empty());
                assert!(row.recommendations.len() <= 4);
            }
        }

        let mut previous = u8::MAX;
        for tier in NARRATIVE_TIERS.iter() {
            assert!(tier.min_percentage < previous);
            assert!(tier.weakest_share <= 100);
            previous = tier.min_percentage;
        }
        assert_eq!(previous, 0);
    }

    #[test]
    fn test_lowercase_first() {
        assert_eq!(lowercase_first("Kerjakan soal"), "kerjakan soal");
        assert_eq!(lowercase_first(""), "");
    }
}
