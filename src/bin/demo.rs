use chainmap::ChainedHashMap;

fn main() {
    let people = [
        ("Карине", "Геворгян"),
        ("Клара", "Новикова"),
        ("Ирина", "Муравьева"),
        ("Ксения", "Стриж"),
        ("Иван", "Янковский"),
        ("Екатерина", "Климова"),
        ("Петр", "Красилов"),
        ("Даниил", "Страхов"),
        ("Никита", "Ефремов"),
        ("Олег", "Даль"),
        ("Татьяна", "Доронина"),
        ("Лада", "Муратова"),
        ("Наталья", "Кустинская"),
    ];

    let mut map: ChainedHashMap<String, String> = ChainedHashMap::new();
    for (name, surname) in people {
        map.put(name.to_string(), surname.to_string());
    }

    for entry in &map {
        println!("{}", entry);
    }
}
