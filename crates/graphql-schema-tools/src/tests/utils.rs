//! Shared fixtures: one schema written two different ways, and its
//! canonical rendition.

// The uneven spacing and indentation are part of the fixture.
pub(super) const SOURCE_ONE: &str = "
  directive @paginate on FIELD_DEFINITION
type Human implements Mammal & FriendlyMammal & Friendly @auth(requires: USER code: 99) {
  id: ID!
  name: String!
  email: String!
  friends: [Friend]
  address: Address
}

extend type Query {
  friendsOf(zebraID: ID humanID: ID): [Friend] @paginate @awesome
  friend(zebraID: ID humanID: ID): Friend
}

interface Mammal  {
  id: ID!
name: String!
}

interface Friendly {
  friends: [Friend]
}

interface FriendlyMammal implements Mammal & Friendly {
  friends: [Friend]
  name: String!
  id: ID!
}

interface Striped {
    stripes: Int!
}

type Address {
  street: String!
  buildingNum: String!
  zipCode: String!
  city: String!
  country: String!
}
type Zebra implements Striped & Friendly & FriendlyMammal & Mammal @awesome @auth(code: 52, requires: UNKNOWN) {
  name: String!
  id: ID!
  friends: [Friend]
  stripes: Int!
}

directive @awesome on OBJECT | FIELD_DEFINITION
union Friend = Zebra | Human

directive @auth(
  code: Int
requires: Role = ADMIN
) on OBJECT | FIELD_DEFINITION

      enum Role { REVIEWER ADMIN USER UNKNOWN}";

pub(super) const SOURCE_TWO: &str = "
type Address {
  buildingNum: String!
  city: String!
  zipCode: String!
  country: String!
  street: String!
}
  interface Striped {
 stripes: Int!
}

 extend type Query {
  friendsOf(zebraID: ID humanID: ID): [Friend] @paginate @awesome
  friend(zebraID: ID humanID: ID): Friend
}


directive @paginate on FIELD_DEFINITION
interface FriendlyMammal implements Friendly & Mammal  {
  friends: [Friend]
  name: String!
  id: ID!
}

type Zebra implements FriendlyMammal & Friendly & Striped & Mammal @awesome @auth(requires: UNKNOWN code: 52) {
  stripes: Int!
  friends: [Friend]
  name: String!
  id: ID!
}

enum Role {
  UNKNOWN
  ADMIN
  REVIEWER
  USER
}

type Human implements Friendly & FriendlyMammal & Mammal @auth(requires: USER code: 99) {
  email: String!
  name: String!
  address: Address
  friends: [Friend]
  id: ID!
}

interface Friendly {
  friends: [Friend]
}
directive @awesome on OBJECT | FIELD_DEFINITION
interface Mammal  {
  name: String!
  id: ID!
}
union Friend = Zebra | Human

directive @auth(
  requires: Role = ADMIN
  code: Int
) on  OBJECT | FIELD_DEFINITION

";

pub(super) const EXPECTED: &str = "\
directive @auth(code: Int, requires: Role = ADMIN) on FIELD_DEFINITION | OBJECT

directive @awesome on FIELD_DEFINITION | OBJECT

directive @paginate on FIELD_DEFINITION

enum Role {
  ADMIN
  REVIEWER
  UNKNOWN
  USER
}

interface Friendly {
  friends: [Friend]
}

interface FriendlyMammal implements Friendly & Mammal {
  friends: [Friend]
  id: ID!
  name: String!
}

interface Mammal {
  id: ID!
  name: String!
}

interface Striped {
  stripes: Int!
}

type Address {
  buildingNum: String!
  city: String!
  country: String!
  street: String!
  zipCode: String!
}

type Human implements Friendly & FriendlyMammal & Mammal @auth(code: 99, requires: USER) {
  address: Address
  email: String!
  friends: [Friend]
  id: ID!
  name: String!
}

type Zebra implements Friendly & FriendlyMammal & Mammal & Striped @auth(code: 52, requires: UNKNOWN) @awesome {
  friends: [Friend]
  id: ID!
  name: String!
  stripes: Int!
}

union Friend = Human | Zebra

extend type Query {
  friend(humanID: ID, zebraID: ID): Friend
  friendsOf(humanID: ID, zebraID: ID): [Friend] @awesome @paginate
}
";
