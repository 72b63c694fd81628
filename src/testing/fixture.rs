/// Tables created by [`FIXTURE_SQL`], in the order the engine lists them.
pub const FIXTURE_TABLES: [&str; 7] = [
    "Album",
    "Artist",
    "Customer",
    "Genre",
    "Invoice",
    "InvoiceLine",
    "Track",
];

/// A pocket-sized Chinook: same table and column names, a handful of rows.
pub const FIXTURE_SQL: &str = "
CREATE TABLE Artist (ArtistId INTEGER PRIMARY KEY, Name NVARCHAR(120));
CREATE TABLE Album (AlbumId INTEGER PRIMARY KEY, Title NVARCHAR(160) NOT NULL, ArtistId INTEGER NOT NULL);
CREATE TABLE Genre (GenreId INTEGER PRIMARY KEY, Name NVARCHAR(120));
CREATE TABLE Track (
    TrackId INTEGER PRIMARY KEY,
    Name NVARCHAR(200) NOT NULL,
    AlbumId INTEGER,
    GenreId INTEGER,
    Milliseconds INTEGER NOT NULL
);
CREATE TABLE Customer (
    CustomerId INTEGER PRIMARY KEY,
    FirstName NVARCHAR(40) NOT NULL,
    LastName NVARCHAR(20) NOT NULL,
    Country NVARCHAR(40)
);
CREATE TABLE Invoice (
    InvoiceId INTEGER PRIMARY KEY,
    CustomerId INTEGER NOT NULL,
    InvoiceDate DATETIME NOT NULL,
    Total NUMERIC(10,2) NOT NULL
);
CREATE TABLE InvoiceLine (
    InvoiceLineId INTEGER PRIMARY KEY,
    InvoiceId INTEGER NOT NULL,
    TrackId INTEGER NOT NULL,
    UnitPrice NUMERIC(10,2) NOT NULL,
    Quantity INTEGER NOT NULL
);

INSERT INTO Artist VALUES (1, 'AC/DC'), (2, 'Queen'), (3, 'Miles Davis');
INSERT INTO Album VALUES (1, 'For Those About To Rock', 1), (2, 'Greatest Hits', 2), (3, 'Kind of Blue', 3);
INSERT INTO Genre VALUES (1, 'Rock'), (2, 'Jazz'), (3, 'Pop');
INSERT INTO Track VALUES
    (1, 'For Those About To Rock', 1, 1, 343719),
    (2, 'Put The Finger On You', 1, 1, 205662),
    (3, 'Bohemian Rhapsody', 2, 1, 354000),
    (4, 'Another One Bites The Dust', 2, 3, 215000),
    (5, 'So What', 3, 2, 545000),
    (6, 'Blue in Green', 3, 2, 337000);
INSERT INTO Customer VALUES
    (1, 'Luis', 'Goncalves', 'Brazil'),
    (2, 'Leonie', 'Kohler', 'Germany'),
    (3, 'Francois', 'Tremblay', 'Canada');
INSERT INTO Invoice VALUES
    (1, 1, '2021-01-01', 1.98),
    (2, 2, '2021-01-02', 3.96),
    (3, 1, '2021-02-01', 0.99),
    (4, 3, '2021-02-03', 1.98);
INSERT INTO InvoiceLine VALUES
    (1, 1, 1, 0.99, 1),
    (2, 1, 3, 0.99, 1),
    (3, 2, 3, 0.99, 2),
    (4, 2, 5, 0.99, 2),
    (5, 3, 4, 0.99, 1),
    (6, 4, 6, 0.99, 2);
";
