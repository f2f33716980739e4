use crate::faker_rs::FakerKind;
use crate::generators::GeneratorRegistry;
use crate::generators::faker_rs::FakerGenerator;
use crate::generators::primitives::PickGenerator;

pub fn register(registry: &mut GeneratorRegistry) {
    for (id, kind) in [
        ("Country", FakerKind::CountryName),
        ("City", FakerKind::CityName),
        ("Zip Code", FakerKind::ZipCode),
        ("Latitude", FakerKind::Latitude),
        ("Longitude", FakerKind::Longitude),
        ("Timezone", FakerKind::TimeZone),
        ("Street Name", FakerKind::StreetName),
        ("State", FakerKind::StateName),
    ] {
        registry.register_generator(Box::new(FakerGenerator::new(id, kind)));
    }
    registry.register_generator(Box::new(PickGenerator::new("County", COUNTIES)));
}

pub const COUNTIES: &[&str] = &[
    "Avon",
    "Bedfordshire",
    "Berkshire",
    "Borders",
    "Buckinghamshire",
    "Cambridgeshire",
    "Central",
    "Cheshire",
    "Cleveland",
    "Clwyd",
    "Cornwall",
    "County Antrim",
    "County Armagh",
    "County Down",
    "County Fermanagh",
    "County Londonderry",
    "County Tyrone",
    "Cumbria",
    "Derbyshire",
    "Devon",
    "Dorset",
    "Dumfries and Galloway",
    "Durham",
    "Dyfed",
    "East Sussex",
    "Essex",
    "Fife",
    "Gloucestershire",
    "Grampian",
    "Greater Manchester",
    "Gwent",
    "Gwynedd County",
    "Hampshire",
    "Herefordshire",
    "Hertfordshire",
    "Highlands and Islands",
    "Humberside",
    "Isle of Wight",
    "Kent",
    "Lancashire",
    "Leicestershire",
    "Lincolnshire",
    "Lothian",
    "Merseyside",
    "Mid Glamorgan",
    "Norfolk",
    "North Yorkshire",
    "Northamptonshire",
    "Northumberland",
    "Nottinghamshire",
    "Oxfordshire",
    "Powys",
    "Rutland",
    "Shropshire",
    "Somerset",
    "South Glamorgan",
    "South Yorkshire",
    "Staffordshire",
    "Strathclyde",
    "Suffolk",
    "Surrey",
    "Tayside",
    "Tyne and Wear",
    "Warwickshire",
    "West Glamorgan",
    "West Midlands",
    "West Sussex",
    "West Yorkshire",
    "Wiltshire",
    "Worcestershire",
];
