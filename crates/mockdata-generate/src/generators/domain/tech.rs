use crate::faker_rs::FakerKind;
use crate::generators::GeneratorRegistry;
use crate::generators::faker_rs::DecoratedFakerGenerator;
use crate::generators::primitives::PickGenerator;

pub fn register(registry: &mut GeneratorRegistry) {
    for (id, values) in [
        ("Programming Language", PROGRAMMING_LANGUAGES),
        ("Framework", FRAMEWORKS),
        ("Database", DATABASES),
        ("Cloud Platform", CLOUD_PLATFORMS),
        ("Operating System", OPERATING_SYSTEMS),
        ("Browser", BROWSERS),
        ("Smartphone Model", SMARTPHONE_MODELS),
    ] {
        registry.register_generator(Box::new(PickGenerator::new(id, values)));
    }
    registry.register_generator(Box::new(DecoratedFakerGenerator::suffixed(
        "App Name",
        FakerKind::CompanyName,
        " App",
    )));
}

pub const PROGRAMMING_LANGUAGES: &[&str] = &[
    "JavaScript",
    "Python",
    "Java",
    "C++",
    "Ruby",
    "PHP",
    "Swift",
    "Go",
    "Rust",
    "TypeScript",
];

pub const FRAMEWORKS: &[&str] = &[
    "React",
    "Angular",
    "Vue",
    "Django",
    "Flask",
    "Spring",
    "Laravel",
    "Express",
    "ASP.NET",
    "Ruby on Rails",
];

pub const DATABASES: &[&str] = &[
    "MySQL",
    "PostgreSQL",
    "MongoDB",
    "Oracle",
    "SQLite",
    "Microsoft SQL Server",
    "Redis",
    "Cassandra",
    "MariaDB",
    "Elasticsearch",
];

pub const CLOUD_PLATFORMS: &[&str] = &[
    "AWS",
    "Google Cloud",
    "Microsoft Azure",
    "IBM Cloud",
    "Oracle Cloud",
    "DigitalOcean",
    "Heroku",
    "Alibaba Cloud",
    "VMware",
    "Rackspace",
];

pub const OPERATING_SYSTEMS: &[&str] = &[
    "Windows",
    "macOS",
    "Linux",
    "iOS",
    "Android",
    "Chrome OS",
    "FreeBSD",
    "Solaris",
    "Ubuntu",
    "Fedora",
];

pub const BROWSERS: &[&str] = &[
    "Chrome",
    "Firefox",
    "Safari",
    "Edge",
    "Opera",
    "Internet Explorer",
    "Brave",
    "Vivaldi",
    "Tor Browser",
    "DuckDuckGo Browser",
];

pub const SMARTPHONE_MODELS: &[&str] = &[
    "iPhone 12",
    "Samsung Galaxy S21",
    "Google Pixel 5",
    "OnePlus 9",
    "Huawei P40",
    "Xiaomi Mi 11",
    "Sony Xperia 1 III",
    "LG Velvet",
    "Motorola Edge",
    "Nokia 8.3",
];
