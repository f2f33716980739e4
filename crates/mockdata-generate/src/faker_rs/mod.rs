//! Thin adapter over the `fake` crate.
//!
//! Every provider primitive the rules rely on is named by a [`FakerKind`], so
//! the rest of the crate never touches `fake` types directly.

use fake::Fake;
use fake::faker::address::en::{
    BuildingNumber, CityName, CountryName, Latitude, Longitude, StateName, StreetName, TimeZone,
    ZipCode,
};
use fake::faker::barcode::en::Isbn13;
use fake::faker::company::en::{CompanyName, Industry};
use fake::faker::creditcard::en::CreditCardNumber;
use fake::faker::currency::en::CurrencyCode;
use fake::faker::filesystem::en::{FileExtension, FileName, MimeType};
use fake::faker::internet::en::{
    DomainSuffix, IPv4, IPv6, MACAddress, Password, SafeEmail, UserAgent, Username,
};
use fake::faker::job::en::Title as JobTitle;
use fake::faker::lorem::en::{Sentence, Sentences, Word, Words};
use fake::faker::name::en::Name;
use fake::faker::number::en::NumberWithFormat;
use rand::RngCore;

/// North American phone layout used for `Phone` and `Business Phone`.
pub const PHONE_FORMAT: &str = "###-###-####";

const PASSWORD_LEN: usize = 15;

/// Provider primitive backed by `fake`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakerKind {
    FullName,
    SafeEmail,
    Username,
    Password,
    Ipv4,
    Ipv6,
    MacAddress,
    UserAgent,
    DomainSuffix,
    PhoneNumber,
    BuildingNumber,
    StreetName,
    CityName,
    CountryName,
    ZipCode,
    StateName,
    TimeZone,
    Latitude,
    Longitude,
    CompanyName,
    Industry,
    JobTitle,
    Word,
    MovieWords,
    Sentence,
    Paragraph,
    CurrencyCode,
    CreditCardNumber,
    FileName,
    FileExtension,
    MimeType,
    Isbn13,
}

impl FakerKind {
    pub const ALL: &'static [FakerKind] = &[
        FakerKind::FullName,
        FakerKind::SafeEmail,
        FakerKind::Username,
        FakerKind::Password,
        FakerKind::Ipv4,
        FakerKind::Ipv6,
        FakerKind::MacAddress,
        FakerKind::UserAgent,
        FakerKind::DomainSuffix,
        FakerKind::PhoneNumber,
        FakerKind::BuildingNumber,
        FakerKind::StreetName,
        FakerKind::CityName,
        FakerKind::CountryName,
        FakerKind::ZipCode,
        FakerKind::StateName,
        FakerKind::TimeZone,
        FakerKind::Latitude,
        FakerKind::Longitude,
        FakerKind::CompanyName,
        FakerKind::Industry,
        FakerKind::JobTitle,
        FakerKind::Word,
        FakerKind::MovieWords,
        FakerKind::Sentence,
        FakerKind::Paragraph,
        FakerKind::CurrencyCode,
        FakerKind::CreditCardNumber,
        FakerKind::FileName,
        FakerKind::FileExtension,
        FakerKind::MimeType,
        FakerKind::Isbn13,
    ];

    /// Stable identifier, `faker.<module>.<primitive>`.
    pub fn id(self) -> &'static str {
        match self {
            FakerKind::FullName => "faker.name.Name",
            FakerKind::SafeEmail => "faker.internet.SafeEmail",
            FakerKind::Username => "faker.internet.Username",
            FakerKind::Password => "faker.internet.Password",
            FakerKind::Ipv4 => "faker.internet.IPv4",
            FakerKind::Ipv6 => "faker.internet.IPv6",
            FakerKind::MacAddress => "faker.internet.MACAddress",
            FakerKind::UserAgent => "faker.internet.UserAgent",
            FakerKind::DomainSuffix => "faker.internet.DomainSuffix",
            FakerKind::PhoneNumber => "faker.number.NumberWithFormat",
            FakerKind::BuildingNumber => "faker.address.BuildingNumber",
            FakerKind::StreetName => "faker.address.StreetName",
            FakerKind::CityName => "faker.address.CityName",
            FakerKind::CountryName => "faker.address.CountryName",
            FakerKind::ZipCode => "faker.address.ZipCode",
            FakerKind::StateName => "faker.address.StateName",
            FakerKind::TimeZone => "faker.address.TimeZone",
            FakerKind::Latitude => "faker.address.Latitude",
            FakerKind::Longitude => "faker.address.Longitude",
            FakerKind::CompanyName => "faker.company.CompanyName",
            FakerKind::Industry => "faker.company.Industry",
            FakerKind::JobTitle => "faker.job.Title",
            FakerKind::Word => "faker.lorem.Word",
            FakerKind::MovieWords => "faker.lorem.Words",
            FakerKind::Sentence => "faker.lorem.Sentence",
            FakerKind::Paragraph => "faker.lorem.Paragraph",
            FakerKind::CurrencyCode => "faker.currency.CurrencyCode",
            FakerKind::CreditCardNumber => "faker.creditcard.CreditCardNumber",
            FakerKind::FileName => "faker.filesystem.FileName",
            FakerKind::FileExtension => "faker.filesystem.FileExtension",
            FakerKind::MimeType => "faker.filesystem.MimeType",
            FakerKind::Isbn13 => "faker.barcode.Isbn13",
        }
    }

    /// Draw one value from the provider.
    pub fn fake(self, rng: &mut dyn RngCore) -> String {
        match self {
            FakerKind::FullName => Name().fake_with_rng(rng),
            FakerKind::SafeEmail => SafeEmail().fake_with_rng(rng),
            FakerKind::Username => Username().fake_with_rng(rng),
            FakerKind::Password => Password(PASSWORD_LEN..PASSWORD_LEN + 1).fake_with_rng(rng),
            FakerKind::Ipv4 => IPv4().fake_with_rng(rng),
            FakerKind::Ipv6 => IPv6().fake_with_rng(rng),
            FakerKind::MacAddress => MACAddress().fake_with_rng(rng),
            FakerKind::UserAgent => UserAgent().fake_with_rng(rng),
            FakerKind::DomainSuffix => DomainSuffix().fake_with_rng(rng),
            FakerKind::PhoneNumber => NumberWithFormat(PHONE_FORMAT).fake_with_rng(rng),
            FakerKind::BuildingNumber => BuildingNumber().fake_with_rng(rng),
            FakerKind::StreetName => StreetName().fake_with_rng(rng),
            FakerKind::CityName => CityName().fake_with_rng(rng),
            FakerKind::CountryName => CountryName().fake_with_rng(rng),
            FakerKind::ZipCode => ZipCode().fake_with_rng(rng),
            FakerKind::StateName => StateName().fake_with_rng(rng),
            FakerKind::TimeZone => TimeZone().fake_with_rng(rng),
            FakerKind::Latitude => Latitude().fake_with_rng(rng),
            FakerKind::Longitude => Longitude().fake_with_rng(rng),
            FakerKind::CompanyName => CompanyName().fake_with_rng(rng),
            FakerKind::Industry => Industry().fake_with_rng(rng),
            FakerKind::JobTitle => JobTitle().fake_with_rng(rng),
            FakerKind::Word => Word().fake_with_rng(rng),
            FakerKind::MovieWords => {
                let words: Vec<String> = Words(3..4).fake_with_rng(rng);
                words.join(" ")
            }
            FakerKind::Sentence => capitalize_first(Sentence(3..10).fake_with_rng(rng)),
            FakerKind::Paragraph => {
                let sentences: Vec<String> = Sentences(3..6).fake_with_rng(rng);
                sentences
                    .into_iter()
                    .map(capitalize_first)
                    .collect::<Vec<_>>()
                    .join(" ")
            }
            FakerKind::CurrencyCode => CurrencyCode().fake_with_rng(rng),
            FakerKind::CreditCardNumber => CreditCardNumber().fake_with_rng(rng),
            FakerKind::FileName => FileName().fake_with_rng(rng),
            FakerKind::FileExtension => FileExtension().fake_with_rng(rng),
            FakerKind::MimeType => MimeType().fake_with_rng(rng),
            FakerKind::Isbn13 => Isbn13().fake_with_rng(rng),
        }
    }
}

fn capitalize_first(text: String) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_lowercase() => first.to_uppercase().chain(chars).collect(),
        _ => text,
    }
}
