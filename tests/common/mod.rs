#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, Utc};
use gardenist::entities::{
    CalendarTask, Collections, CompostingMethod, Fertilizer, GrowingGround, ModuleId, Plant, RecentView,
    SeasonalTip,
};

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn plant(id: &str, common: &str, scientific: &str) -> Plant {
    Plant {
        id: id.to_string(),
        common_name: common.to_string(),
        scientific_name: scientific.to_string(),
        family: None,
        sunlight: None,
        watering: None,
        image: None,
        image_position: 50,
    }
}

pub fn fertilizer(id: &str, name: &str) -> Fertilizer {
    Fertilizer {
        id: id.to_string(),
        fertilizer_name: name.to_string(),
        npk_ratio: None,
        application_rate: None,
        is_organic: false,
        image: None,
        image_position: 50,
    }
}

pub fn compost(id: &str, name: &str) -> CompostingMethod {
    CompostingMethod {
        id: id.to_string(),
        method_name: name.to_string(),
        difficulty: None,
        duration_weeks: None,
        image: None,
        image_position: 50,
    }
}

pub fn ground(id: &str, name: &str) -> GrowingGround {
    GrowingGround {
        id: id.to_string(),
        name: name.to_string(),
        location: None,
        soil_type: None,
        area_sq_m: None,
        image: None,
        image_position: 50,
    }
}

pub fn tip(id: &str, title: &str, description: &str) -> SeasonalTip {
    SeasonalTip {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        season: None,
        image: None,
        image_position: 50,
    }
}

pub fn sample_collections() -> Collections {
    Collections {
        plants: vec![
            plant("p1", "Sweet Basil", "Ocimum basilicum"),
            plant("p2", "Tomato", "Solanum lycopersicum"),
            plant("p3", "Thai Basil", "Ocimum basilicum var. thyrsiflora"),
            plant("p4", "Lavender", "Lavandula angustifolia"),
        ],
        fertilizers: vec![
            fertilizer("f1", "Organic Fish Emulsion"),
            fertilizer("f2", "Synthetic 10-10-10"),
            fertilizer("f3", "ORGANIC Bone Meal"),
            fertilizer("f4", "Worm Castings"),
        ],
        composting_methods: vec![compost("c1", "Hot Composting"), compost("c2", "Vermicomposting")],
        growing_grounds: vec![ground("g1", "Raised Bed North"), ground("g2", "Balcony Pots")],
        seasonal_tips: vec![
            tip("t1", "Mulch before frost", "Spread straw around perennials"),
            tip("t2", "Start seeds indoors", "Tomatoes need six weeks under lights"),
        ],
    }
}

pub fn task(id: &str, title: &str, date: NaiveDate, completed: bool) -> CalendarTask {
    CalendarTask {
        id: id.to_string(),
        module: ModuleId::GrowingGrounds,
        entity_id: "g1".to_string(),
        date,
        title: title.to_string(),
        task_type: "care".to_string(),
        completed,
        color: "green".to_string(),
    }
}

pub fn view(item_id: &str, module: ModuleId, viewed_at: &str) -> RecentView {
    RecentView {
        item_id: item_id.to_string(),
        item_type: module.to_string(),
        module,
        viewed_at: viewed_at.parse::<DateTime<Utc>>().unwrap(),
    }
}
