/// Unit tests against the public library API
use contact_book::*;
use chrono::NaiveDate;

#[cfg(test)]
mod basic_unit_tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn book_with_birthdays(entries: &[(&str, &str)]) -> AddressBook {
        let mut book = AddressBook::new();
        for (name, birthday) in entries {
            let mut record = Record::new(*name).unwrap();
            record.set_birthday(birthday).unwrap();
            book.upsert(record);
        }
        book
    }

    #[test]
    fn test_phone_round_trip() {
        for text in ["0000000000", "1234567890", "9999999999"] {
            assert_eq!(PhoneNumber::new(text).unwrap().as_str(), text);
        }
        assert!(matches!(PhoneNumber::new("12345"), Err(DomainError::InvalidPhone(_))));
    }

    #[test]
    fn test_birthday_round_trip() {
        let birthday = Birthday::parse("05.11.1987").unwrap();
        assert_eq!(birthday.to_text(), "05.11.1987");
        assert_eq!(Birthday::parse("31.06.1987").unwrap_err().kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_record_change_phone() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1234567890").unwrap();

        record.change_phone("1234567890", "0987654321").unwrap();
        assert_eq!(record.list_phones(), vec!["0987654321"]);

        let err = record.change_phone("1234567890", "1111111111").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_upcoming_birthdays_week() {
        let book = book_with_birthdays(&[
            ("Today", "10.06.1990"),
            ("Saturday", "15.06.1990"),
            ("SevenDays", "17.06.1990"),
            ("EightDays", "18.06.1990"),
            ("Yesterday", "09.06.1990"),
        ]);

        let upcoming = book.upcoming_birthdays(date(2024, 6, 10));
        let pairs: Vec<(&str, NaiveDate)> = upcoming
            .iter()
            .map(|b| (b.name.as_str(), b.congratulation_date))
            .collect();

        assert_eq!(
            pairs,
            vec![
                ("Today", date(2024, 6, 10)),
                ("Saturday", date(2024, 6, 17)),
                ("SevenDays", date(2024, 6, 17)),
            ]
        );
    }

    #[test]
    fn test_upcoming_birthdays_across_new_year() {
        let book = book_with_birthdays(&[("NewYear", "02.01.1990")]);
        let upcoming = book.upcoming_birthdays(date(2024, 12, 28));

        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].next_occurrence, date(2025, 1, 2));
        assert_eq!(upcoming[0].days_ahead, 5);
    }

    #[test]
    fn test_command_errors_have_kinds() {
        let mut book = AddressBook::new();
        let args: Vec<String> = vec!["Ghost".to_string()];

        let err = commands::show_phone(&args, &book).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let err = commands::add_contact(&args, &mut book).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotEnoughArguments);
    }

    #[test]
    fn test_storage_creation() {
        let storage = SqliteStorage::open_in_memory();
        assert!(storage.is_ok());
    }
}
