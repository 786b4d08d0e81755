//! Fixed seed catalog used when no persisted snapshot exists.
//!
//! # Invariants
//! - The seed list is non-empty and every entry passes write validation.
//! - Entry order here is the initial display order.

use crate::model::project::{NoteColor, ProjectIcon, ProjectRecord, SpecialNote};

/// Returns the fixed seed catalog in display order.
pub fn seed_catalog() -> Vec<ProjectRecord> {
    vec![
        ProjectRecord {
            title: "ChitIQ".to_string(),
            subtitle: "Yapay Zeka Destekli İngilizce Konuşma Asistanı".to_string(),
            description: r#"ChitIQ, Can AKALIN tarafından geliştirilen ve özellikle lise öğrencilerinin İngilizce konuşma sınavlarına hazırlanmalarını sağlamak amacıyla "Türkiye Yüzyılı Maarif Modeli"ne uygun olarak tasarlanmış, React ve Google Gemini yapay zeka teknolojileriyle güçlendirilmiş yenilikçi bir eğitim uygulamasıdır. Kullanıcıların seçtikleri veya serbest konulardaki konuşmalarını kaydedip analiz eden bu asistan; Uyum, Organizasyon, Sunum, Dil Kullanımı ve Yaratıcılık olmak üzere beş temel kriter üzerinden anlık puanlama, detaylı geri bildirim, ses dökümü (transkripsiyon) ve gelişim takibi sunarak dil öğrenim sürecini akıllı, etkileşimli ve veriye dayalı bir deneyime dönüştürür."#
                .to_string(),
            tags: vec![
                "Eğitim".to_string(),
                "Yapay Zeka".to_string(),
                "Gemini API".to_string(),
                "React".to_string(),
                "Maarif Modeli".to_string(),
            ],
            icon_name: ProjectIcon::Mic,
            icon_bg_color: "bg-violet-600".to_string(),
            github_url: None,
            live_url: Some("https://chitiq-v2-185961838379.us-west1.run.app".to_string()),
            featured: Some(true),
            special_note: None,
        },
        ProjectRecord {
            title: "OKULREHBER".to_string(),
            subtitle: "Dijital Rehberlik ve Bilgilendirme".to_string(),
            description: "Lise düzeyindeki eğitim kurumlarının dijital ekranlarında (kiosk/akıllı tahta) kullanılmak üzere tasarlanmış; MEB yönetmeliğine dayalı kuralları Google Gemini API desteğiyle sunan, Instagram hikayesi tarzı görsel efektlerle zenginleştirilmiş tam ekran dijital rehberlik uygulaması."
                .to_string(),
            tags: vec![
                "Eğitim".to_string(),
                "Dijital Pano".to_string(),
                "Gemini API".to_string(),
                "MEB".to_string(),
            ],
            icon_name: ProjectIcon::Sheet,
            icon_bg_color: "bg-indigo-600".to_string(),
            github_url: None,
            live_url: Some("https://okulrehber-185961838379.us-west1.run.app".to_string()),
            featured: None,
            special_note: None,
        },
        ProjectRecord {
            title: "Classmate Creator".to_string(),
            subtitle: "9. Sınıf İngilizce İçerik Üreticisi".to_string(),
            description: "9. Sınıf İngilizce dersi için öğrencilerin birbirlerini tanımalarına yönelik pratik yapabilecekleri, müfredata uygun içerikler oluşturan dijital bir araç."
                .to_string(),
            tags: vec![
                "Eğitim".to_string(),
                "İngilizce".to_string(),
                "9. Sınıf".to_string(),
                "Gemini API".to_string(),
            ],
            icon_name: ProjectIcon::Desk,
            icon_bg_color: "bg-orange-500".to_string(),
            github_url: None,
            live_url: Some(
                "https://classmate-creator-9th-grade-english-185961838379.us-west1.run.app"
                    .to_string(),
            ),
            featured: None,
            special_note: None,
        },
        ProjectRecord {
            title: "Atatürk'ün Hayatı".to_string(),
            subtitle: "Dijital İz Projesi".to_string(),
            description: "Mustafa Kemal Atatürk'ü anmak ve değerli fikirlerini gelecek nesillere aktarmak amacıyla hazırladığım özel bir proje."
                .to_string(),
            tags: vec!["Tarih".to_string(), "Eğitim".to_string()],
            icon_name: ProjectIcon::Star,
            icon_bg_color: "bg-red-600".to_string(),
            github_url: Some("https://github.com/canakalin89/atam-dijital-iz".to_string()),
            live_url: Some("https://atam-dijital-iz.lovable.app/".to_string()),
            featured: None,
            special_note: Some(SpecialNote {
                icon_name: ProjectIcon::Heart,
                text: "Bu proje, Atatürk'ün anısına saygı ve sevgiyle hazırlanmıştır."
                    .to_string(),
                color: NoteColor::Red,
            }),
        },
        ProjectRecord {
            title: "İnkılap Tarihi Panosu".to_string(),
            subtitle: "İnteraktif Dijital Pano".to_string(),
            description: "İnkılap Tarihi dersleri için hazırlanmış interaktif bir dijital pano projesi. Öğrenmeyi görsel ve ilgi çekici hale getirir."
                .to_string(),
            tags: vec![
                "Eğitim".to_string(),
                "Tarih".to_string(),
                "İnteraktif".to_string(),
            ],
            icon_name: ProjectIcon::Star,
            icon_bg_color: "bg-red-700".to_string(),
            github_url: Some("https://github.com/canakalin89/ata_pano".to_string()),
            live_url: Some("https://atam1923.netlify.app/".to_string()),
            featured: None,
            special_note: None,
        },
        ProjectRecord {
            title: "YKS Geri Sayım Sayacı".to_string(),
            subtitle: "Motivasyonel Geri Sayım".to_string(),
            description: "Üniversite sınavına hazırlanan öğrenciler için motivasyon sağlayan, hedeflere odaklanmaya yardımcı olan bir geri sayım aracı."
                .to_string(),
            tags: vec!["Motivasyon".to_string(), "Araç".to_string()],
            icon_name: ProjectIcon::Clock,
            icon_bg_color: "bg-purple-500".to_string(),
            github_url: Some("https://github.com/canakalin89/sayac_web".to_string()),
            live_url: Some("https://asalyks.netlify.app/".to_string()),
            featured: None,
            special_note: None,
        },
    ]
}
