//! One-shot population of the reference collections.
//!
//! A collection is seeded only when it holds no documents at all. A collection
//! with any content is left untouched, so partially seeded or outdated data is
//! never topped up or reconciled.

use models::{collections, ids::new_id, service::Service, testimonial::Testimonial};
use serde::Serialize;
use tracing::info;

use crate::{
    errors::ServiceError,
    store::{to_document, DocumentStore},
};

struct ServiceSeed {
    title: &'static str,
    description: &'static str,
    price: &'static str,
    duration: &'static str,
    features: &'static [&'static str],
}

struct TestimonialSeed {
    name: &'static str,
    text: &'static str,
    rating: i32,
    date: &'static str,
}

const SERVICES: &[ServiceSeed] = &[
    ServiceSeed {
        title: "Психоастрологическая консультация",
        description: "Глубокий анализ личности через призму астрологии и психологии. Поможет понять ваши сильные стороны, скрытые таланты и жизненные задачи.",
        price: "5 000 ₽",
        duration: "90 минут",
        features: &["Анализ натальной карты", "Психологический портрет", "Рекомендации по развитию", "Запись сессии"],
    },
    ServiceSeed {
        title: "Анализ натальной карты",
        description: "Детальный разбор вашей натальной карты с акцентом на ключевые аспекты личности, кармические задачи и потенциал развития.",
        price: "3 500 ₽",
        duration: "60 минут",
        features: &["Полный анализ планет", "Аспекты и конфигурации", "Письменный отчет", "Рекомендации"],
    },
    ServiceSeed {
        title: "Консультация по отношениям",
        description: "Астропсихологический анализ совместимости и динамики отношений. Поможет понять партнера и гармонизировать отношения.",
        price: "4 500 ₽",
        duration: "75 минут",
        features: &["Синастрический анализ", "Композитная карта", "Советы по взаимодействию", "Прогноз развития"],
    },
    ServiceSeed {
        title: "Трансформационная сессия",
        description: "Глубокая работа с текущими жизненными вызовами через интеграцию астрологических инсайтов и психологических практик.",
        price: "6 000 ₽",
        duration: "120 минут",
        features: &["Диагностика блоков", "Трансформационные техники", "Персональные практики", "План развития"],
    },
    ServiceSeed {
        title: "Карьерное ориентирование",
        description: "Определение профессионального призвания и карьерного пути через астрологический анализ талантов и предрасположенностей.",
        price: "4 000 ₽",
        duration: "60 минут",
        features: &["Анализ призвания", "Профессиональные рекомендации", "Благоприятные периоды", "Стратегия развития"],
    },
];

const TESTIMONIALS: &[TestimonialSeed] = &[
    TestimonialSeed {
        name: "Анна М.",
        text: "Консультация помогла мне понять глубинные причины моих реакций и найти внутренние ресурсы для изменений. Очень благодарна за такой деликатный и профессиональный подход!",
        rating: 5,
        date: "15 февраля 2024",
    },
    TestimonialSeed {
        name: "Дмитрий К.",
        text: "Никогда не верил в астрологию, но решил попробовать в сложный период. Был поражен точностью анализа и практичностью рекомендаций. Многое стало на свои места.",
        rating: 5,
        date: "28 января 2024",
    },
    TestimonialSeed {
        name: "Елена С.",
        text: "Консультация по отношениям буквально спасла мой брак. Поняла, как лучше взаимодействовать с мужем, учитывая наши астрологические особенности. Рекомендую всем!",
        rating: 5,
        date: "10 марта 2024",
    },
];

/// The service catalog with freshly generated identifiers.
pub fn catalog_services() -> Vec<Service> {
    SERVICES
        .iter()
        .map(|s| Service {
            id: new_id(),
            title: s.title.into(),
            description: s.description.into(),
            price: s.price.into(),
            duration: s.duration.into(),
            features: s.features.iter().map(|f| f.to_string()).collect(),
        })
        .collect()
}

/// The testimonial set with freshly generated identifiers.
pub fn catalog_testimonials() -> Vec<Testimonial> {
    TESTIMONIALS
        .iter()
        .map(|t| Testimonial {
            id: new_id(),
            name: t.name.into(),
            text: t.text.into(),
            rating: t.rating,
            date: t.date.into(),
            avatar_url: None,
        })
        .collect()
}

/// Documents inserted per collection by a seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub services_inserted: usize,
    pub testimonials_inserted: usize,
}

impl SeedReport {
    pub fn total(&self) -> usize {
        self.services_inserted + self.testimonials_inserted
    }
}

/// Seed services, then testimonials. Safe to call repeatedly.
pub async fn seed_reference_data(store: &dyn DocumentStore) -> Result<SeedReport, ServiceError> {
    let services_inserted = seed_collection(store, collections::SERVICES, catalog_services).await?;
    let testimonials_inserted =
        seed_collection(store, collections::TESTIMONIALS, catalog_testimonials).await?;
    Ok(SeedReport { services_inserted, testimonials_inserted })
}

async fn seed_collection<T, F>(
    store: &dyn DocumentStore,
    collection: &str,
    build: F,
) -> Result<usize, ServiceError>
where
    T: Serialize,
    F: FnOnce() -> Vec<T>,
{
    let existing = store.count(collection).await?;
    if existing > 0 {
        info!(collection, existing, event = "seed_skipped", "collection already populated");
        return Ok(0);
    }
    let docs = build().iter().map(to_document).collect::<Result<Vec<_>, _>>()?;
    let inserted = docs.len();
    store.insert_many(collection, docs).await?;
    info!(collection, inserted, event = "seed_inserted", "seeded reference collection");
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;
    use serde_json::json;

    #[test]
    fn catalog_entries_are_complete() {
        let services = catalog_services();
        assert_eq!(services.len(), 5);
        for s in &services {
            assert!(!s.id.is_empty() && !s.title.is_empty() && !s.description.is_empty());
            assert!(!s.price.is_empty() && !s.duration.is_empty());
            assert_eq!(s.features.len(), 4);
        }
        let testimonials = catalog_testimonials();
        assert_eq!(testimonials.len(), 3);
        assert!(testimonials.iter().all(|t| t.has_valid_rating() && !t.text.is_empty()));
    }

    #[test]
    fn every_build_gets_new_ids() {
        let a = catalog_services();
        let b = catalog_services();
        assert!(a.iter().zip(&b).all(|(x, y)| x.id != y.id));
    }

    #[tokio::test]
    async fn seeds_empty_store_once() -> Result<(), anyhow::Error> {
        let store = MemoryStore::new();
        let first = seed_reference_data(store.as_ref()).await?;
        assert_eq!(first, SeedReport { services_inserted: 5, testimonials_inserted: 3 });

        let second = seed_reference_data(store.as_ref()).await?;
        assert_eq!(second.total(), 0);
        assert_eq!(store.count(collections::SERVICES).await?, 5);
        assert_eq!(store.count(collections::TESTIMONIALS).await?, 3);
        Ok(())
    }

    #[tokio::test]
    async fn partial_collection_is_not_topped_up() -> Result<(), anyhow::Error> {
        let store = MemoryStore::new();
        store
            .insert_one(collections::SERVICES, to_document(&json!({"id": "legacy", "title": "old"}))?)
            .await?;

        let report = seed_reference_data(store.as_ref()).await?;
        assert_eq!(report.services_inserted, 0);
        assert_eq!(report.testimonials_inserted, 3);
        assert_eq!(store.count(collections::SERVICES).await?, 1);
        Ok(())
    }
}
