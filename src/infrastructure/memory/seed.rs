use crate::domain::entities::{CatalogEntry, EntryStatus, PackageRecord, PickerOption};

pub fn repository_packages() -> Vec<PackageRecord> {
    vec![
        PackageRecord::new("firefox", "Firefox", "120.0")
            .with_description("Свободный браузер от Mozilla")
            .with_category("Браузеры")
            .with_size(65.0)
            .with_os_versions(&["Debian 10+", "Debian 11+"])
            .with_license("MPL-2.0")
            .with_website("https://www.mozilla.org/firefox/"),
        PackageRecord::new("code", "Visual Studio Code", "1.85.0")
            .with_description("Редактор кода от Microsoft")
            .with_category("Разработка")
            .with_size(85.0)
            .with_os_versions(&["Debian 11+", "Debian 12+"])
            .with_license("MIT")
            .with_website("https://code.visualstudio.com/"),
        PackageRecord::new("gimp", "GIMP", "2.10.36")
            .with_description("Редактор растровой графики")
            .with_category("Графика")
            .with_size(120.0)
            .with_os_versions(&["Debian 10+"])
            .with_license("GPL-3.0")
            .with_website("https://www.gimp.org/"),
        PackageRecord::new("blender", "Blender", "4.0.0")
            .with_description("3D редактор и аниматор")
            .with_category("Графика")
            .with_size(310.0)
            .with_os_versions(&["Debian 11+", "Debian 12+"])
            .with_license("GPL-2.0")
            .with_website("https://www.blender.org/"),
        PackageRecord::new("libreoffice", "LibreOffice", "7.6.2")
            .with_description("Офисный пакет")
            .with_category("Офисные")
            .with_size(280.0)
            .with_os_versions(&["Debian 10+", "Debian 11+"])
            .with_license("MPL-2.0")
            .with_website("https://www.libreoffice.org/"),
    ]
}

pub fn catalog_entries() -> Vec<CatalogEntry> {
    vec![
        entry(1, "Visual Studio Code", "code", "1.85.0", "Разработка")
            .with_description("Редактор кода от Microsoft")
            .with_size(85.0)
            .with_os_versions(["Debian 11+"])
            .with_website("https://code.visualstudio.com/")
            .with_license("MIT"),
        entry(2, "Firefox", "firefox", "120.0", "Браузеры")
            .with_description("Свободный браузер от Mozilla")
            .with_size(65.0)
            .with_os_versions(["Debian 10+"])
            .with_website("https://www.mozilla.org/firefox/")
            .with_license("MPL-2.0"),
        entry(3, "GIMP", "gimp", "2.10.36", "Графика")
            .with_description("Редактор растровой графики")
            .with_size(120.0)
            .with_os_versions(["Debian 11+"])
            .with_website("https://www.gimp.org/")
            .with_license("GPL-3.0"),
        entry(4, "LibreOffice", "libreoffice", "7.6.2", "Офисные")
            .with_description("Офисный пакет")
            .with_size(280.0)
            .with_os_versions(["Debian 10+"])
            .with_website("https://www.libreoffice.org/")
            .with_license("MPL-2.0"),
        entry(5, "Blender", "blender", "4.0.0", "3D графика")
            .with_status(EntryStatus::Pending)
            .with_description("3D редактор и аниматор")
            .with_size(310.0)
            .with_os_versions(["Debian 12+"])
            .with_website("https://www.blender.org/")
            .with_license("GPL-2.0"),
    ]
}

fn entry(id: u64, name: &str, package: &str, version: &str, category: &str) -> CatalogEntry {
    CatalogEntry::new(
        name.to_string(),
        package.to_string(),
        version.to_string(),
        category.to_string(),
    )
    .with_id(id)
    .with_status(EntryStatus::Active)
}

pub fn tag_options() -> Vec<PickerOption> {
    [
        "Графика",
        "Разработка",
        "Web",
        "IDE",
        "Браузер",
        "Open Source",
        "Free",
        "Офис",
        "3D",
        "Дизайн",
        "Редактор",
        "Текст",
        "Видео",
        "Аудио",
    ]
    .into_iter()
    .map(PickerOption::new)
    .collect()
}

pub fn analog_options() -> Vec<PickerOption> {
    [
        ("Chrome", "Браузер от Google"),
        ("Chromium", "Открытая версия Chrome"),
        ("Photoshop", "Редактор растровой графики"),
        ("Inkscape", "Векторный редактор"),
        ("Sublime Text", "Текстовый редактор"),
        ("Atom", "Текстовый редактор от GitHub"),
    ]
    .into_iter()
    .map(|(label, description)| PickerOption::new(label).with_description(description))
    .collect()
}
