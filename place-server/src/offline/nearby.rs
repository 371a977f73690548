//! Templates for generated nearby places.

/// Representative names and descriptions for one category.
#[derive(Debug)]
pub struct NearbyTemplate {
    pub names: &'static [&'static str],
    pub descriptions: &'static [&'static str],
}

/// Template used for categories we have no table for.
pub static GENERIC: NearbyTemplate = NearbyTemplate {
    names: &["Local Place"],
    descriptions: &["Point of Interest"],
};

pub const STREETS: &[&str] = &[
    "MG Road",
    "Station Road",
    "Gandhi Marg",
    "Nehru Street",
    "Temple Road",
    "Market Lane",
    "Park Avenue",
    "Lake View Road",
];

pub const AREAS: &[&str] = &[
    "Old Town",
    "Civil Lines",
    "Cantonment",
    "Market Area",
    "Railway Colony",
    "New Extension",
];

/// Template for a category id.
pub fn template_for(category_id: &str) -> &'static NearbyTemplate {
    match category_id {
        "restaurant" => &RESTAURANT,
        "cafe" => &CAFE,
        "hotel" => &HOTEL,
        "attraction" => &ATTRACTION,
        "shopping" => &SHOPPING,
        "hospital" => &HOSPITAL,
        "pharmacy" => &PHARMACY,
        "atm" => &ATM,
        "transport" => &TRANSPORT,
        "park" => &PARK,
        "temple" => &TEMPLE,
        "market" => &MARKET,
        _ => &GENERIC,
    }
}

static RESTAURANT: NearbyTemplate = NearbyTemplate {
    names: &[
        "Spice Garden",
        "Annapurna Bhojanalaya",
        "Tandoor House",
        "Dosa Corner",
        "Royal Thali",
        "Biryani Point",
    ],
    descriptions: &[
        "North Indian cuisine",
        "Pure vegetarian thali",
        "South Indian breakfast",
        "Family restaurant",
    ],
};

static CAFE: NearbyTemplate = NearbyTemplate {
    names: &["Chai Point", "Filter Kaapi House", "Brew Street", "Irani Cafe"],
    descriptions: &["Tea and snacks", "Coffee and pastries", "All-day breakfast"],
};

static HOTEL: NearbyTemplate = NearbyTemplate {
    names: &[
        "Hotel Residency",
        "Grand Palace Inn",
        "Comfort Stay",
        "Heritage Haveli",
        "Budget Lodge",
    ],
    descriptions: &["Business hotel", "Heritage stay", "Budget rooms", "Family rooms"],
};

static ATTRACTION: NearbyTemplate = NearbyTemplate {
    names: &["City Museum", "Old Fort", "Clock Tower", "Heritage Walk", "Art Gallery"],
    descriptions: &["Historic landmark", "Museum", "Viewpoint"],
};

static SHOPPING: NearbyTemplate = NearbyTemplate {
    names: &["City Centre Mall", "Handloom Emporium", "Fashion Street", "Electronics Plaza"],
    descriptions: &["Shopping mall", "Local handicrafts", "Clothing and accessories"],
};

static HOSPITAL: NearbyTemplate = NearbyTemplate {
    names: &["City Hospital", "Government General Hospital", "Lifeline Clinic", "Apollo Care"],
    descriptions: &["24x7 emergency", "Multi-speciality hospital", "Outpatient clinic"],
};

static PHARMACY: NearbyTemplate = NearbyTemplate {
    names: &["Jan Aushadhi Kendra", "Wellness Medicals", "City Chemist"],
    descriptions: &["Medicines and essentials", "Open late"],
};

static ATM: NearbyTemplate = NearbyTemplate {
    names: &["SBI ATM", "HDFC Bank ATM", "ICICI Bank ATM", "Axis Bank ATM"],
    descriptions: &["24 hour ATM", "Cash withdrawal"],
};

static TRANSPORT: NearbyTemplate = NearbyTemplate {
    names: &["Central Bus Stand", "Railway Station", "Metro Station", "Auto Rickshaw Stand"],
    descriptions: &["Public transport", "Intercity connections", "Local transit"],
};

static PARK: NearbyTemplate = NearbyTemplate {
    names: &["Gandhi Park", "Botanical Garden", "Lakeside Gardens", "Children's Park"],
    descriptions: &["Public garden", "Walking track", "Green space"],
};

static TEMPLE: NearbyTemplate = NearbyTemplate {
    names: &["Shiva Temple", "Hanuman Mandir", "Durga Temple", "Ganesh Mandir", "Krishna Temple"],
    descriptions: &["Hindu temple", "Ancient shrine", "Place of worship"],
};

static MARKET: NearbyTemplate = NearbyTemplate {
    names: &["Main Bazaar", "Vegetable Market", "Flower Market", "Weekly Haat"],
    descriptions: &["Local market", "Fresh produce", "Street shopping"],
};
