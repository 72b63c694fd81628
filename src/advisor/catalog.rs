//! Knowledge about the sample databases the editor ships queries for.

/// A natural join between an entity table and its partner:
/// `table.column = partner.partner_column`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relation {
    pub table: &'static str,
    pub column: &'static str,
    pub partner: &'static str,
    pub partner_column: &'static str,
    /// Alias used for the partner when the query does not already use it.
    pub alias: &'static str,
}

const fn relation(
    table: &'static str,
    column: &'static str,
    partner: &'static str,
    partner_column: &'static str,
    alias: &'static str,
) -> Relation {
    Relation {
        table,
        column,
        partner,
        partner_column,
        alias,
    }
}

static CHINOOK_RELATIONS: [Relation; 10] = [
    relation("Customer", "CustomerId", "Invoice", "CustomerId", "I"),
    relation("Invoice", "InvoiceId", "InvoiceLine", "InvoiceId", "IL"),
    relation("InvoiceLine", "TrackId", "Track", "TrackId", "T"),
    relation("Track", "AlbumId", "Album", "AlbumId", "A"),
    relation("Album", "ArtistId", "Artist", "ArtistId", "AR"),
    relation("Artist", "ArtistId", "Album", "ArtistId", "A"),
    relation("Track", "GenreId", "Genre", "GenreId", "G"),
    relation("Track", "MediaTypeId", "MediaType", "MediaTypeId", "MT"),
    relation("Employee", "EmployeeId", "Customer", "SupportRepId", "C"),
    relation("Playlist", "PlaylistId", "PlaylistTrack", "PlaylistId", "PT"),
];

static ADVENTURE_WORKS_RELATIONS: [Relation; 6] = [
    relation("SalesOrderHeader", "TerritoryID", "SalesTerritory", "TerritoryID", "st"),
    relation("SalesOrderHeader", "SalesOrderID", "SalesOrderDetail", "SalesOrderID", "sod"),
    relation("SalesOrderHeader", "CustomerID", "Customer", "CustomerID", "c"),
    relation("SalesOrderDetail", "ProductID", "Product", "ProductID", "p"),
    relation("Product", "ProductSubcategoryID", "ProductSubcategory", "ProductSubcategoryID", "psc"),
    relation("ProductSubcategory", "ProductCategoryID", "ProductCategory", "ProductCategoryID", "pc"),
];

const CHINOOK_QUERY: &str = "SELECT
  C.FirstName,
  C.LastName,
  COUNT(I.InvoiceId) AS InvoiceCount,
  SUM(I.Total) AS TotalSpent
FROM Customer C
INNER JOIN Invoice I ON C.CustomerId = I.CustomerId
WHERE EXISTS (
  SELECT 1
  FROM InvoiceLine IL
  INNER JOIN Track T ON IL.TrackId = T.TrackId
  INNER JOIN Album A ON T.AlbumId = A.AlbumId
  INNER JOIN Artist AR ON A.ArtistId = AR.ArtistId
  WHERE IL.InvoiceId = I.InvoiceId
    AND AR.Name = 'Queen'
)
GROUP BY C.CustomerId, C.FirstName, C.LastName
HAVING COUNT(I.InvoiceId) > 1
ORDER BY TotalSpent DESC
LIMIT 10;";

const ADVENTURE_WORKS_QUERY: &str = "WITH TerritorySales AS (
  SELECT
    soh.TerritoryID,
    SUM(soh.TotalDue) AS TotalSales,
    COUNT(soh.SalesOrderID) AS OrderCount
  FROM SalesOrderHeader AS soh
  WHERE strftime('%Y', soh.OrderDate) = '2013'
  GROUP BY soh.TerritoryID
)
SELECT
  st.Name AS Territory,
  ts.OrderCount,
  printf('%.2f', ts.TotalSales) AS TotalSales
FROM TerritorySales AS ts
JOIN SalesTerritory AS st ON ts.TerritoryID = st.TerritoryID
ORDER BY ts.TotalSales DESC;";

/// Sample databases with database-specific follow-up rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Catalog {
    Chinook,
    AdventureWorks,
}

impl Catalog {
    /// Recognise a catalog from the active database id (usually its file name).
    pub fn detect(database_id: &str) -> Option<Self> {
        let id = database_id.to_ascii_lowercase();
        if id.contains("chinook") {
            Some(Catalog::Chinook)
        } else if id.contains("adventureworks") {
            Some(Catalog::AdventureWorks)
        } else {
            None
        }
    }

    /// Join rules in priority order.
    pub fn relations(self) -> &'static [Relation] {
        match self {
            Catalog::Chinook => &CHINOOK_RELATIONS,
            Catalog::AdventureWorks => &ADVENTURE_WORKS_RELATIONS,
        }
    }

    /// Showcase query placed in the editor when the database is opened.
    pub fn default_query(self) -> &'static str {
        match self {
            Catalog::Chinook => CHINOOK_QUERY,
            Catalog::AdventureWorks => ADVENTURE_WORKS_QUERY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::*;
    use rstest::rstest;

    #[rstest]
    #[case("Chinook_Sqlite.sqlite", Some(Catalog::Chinook))]
    #[case("chinook.db", Some(Catalog::Chinook))]
    #[case("AdventureWorks-sqlite.db", Some(Catalog::AdventureWorks))]
    #[case("northwind.db", None)]
    #[case("", None)]
    fn detects_catalog_from_database_id(#[case] id: &str, #[case] expected: Option<Catalog>) {
        assert_eq!(Catalog::detect(id), expected);
    }

    #[rstest]
    #[case(Catalog::Chinook)]
    #[case(Catalog::AdventureWorks)]
    fn default_queries_validate_against_their_tables(#[case] catalog: Catalog) {
        let schema: Schema = catalog
            .relations()
            .iter()
            .flat_map(|r| [r.table, r.partner])
            .map(Table::new)
            .collect();
        let result = validate(catalog.default_query(), Some(&schema));
        assert!(result.is_valid(), "{catalog:?}: {:?}", result.issues);
    }
}
